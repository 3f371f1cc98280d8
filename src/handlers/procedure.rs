use crate::error::ApiError;
use crate::handlers::delete::deleted;
use crate::models::Envelope;
use crate::routes;
use crate::state::AppState;
use axum::extract::{Path, State};

/// DELETE /sp/{alum_id} handler - Delete a row through the `sp_deleteRow` stored routine
///
/// Same contract as DELETE /pathways/{pathway_id}.
#[utoipa::path(
    delete,
    path = routes::PROCEDURE_ITEM,
    params(
        ("alum_id" = String, Path, description = "Id passed to sp_deleteRow")
    ),
    responses(
        (status = 200, description = "Row deleted (documented policy)", body = Envelope),
        (status = 201, description = "Row deleted (legacy policy)", body = Envelope),
        (status = 400, description = "Store error", body = Envelope),
        (status = 404, description = "Routine removed nothing", body = Envelope)
    ),
    tag = "pathways"
)]
pub async fn procedure_delete_handler(
    State(state): State<AppState>,
    Path(alum_id): Path<String>,
) -> Result<Envelope, ApiError> {
    tracing::debug!("Route /sp_deleteRow DELETE {}", alum_id);
    let result = state.store.delete_via_procedure(&alum_id).await;
    deleted(&state, alum_id, result)
}
