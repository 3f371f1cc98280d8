use crate::error::ApiError;
use crate::models::Envelope;
use crate::routes;
use crate::state::AppState;
use axum::extract::{Path, State};

/// GET /pathways/{pathway_id} handler - Look up one pathway
#[utoipa::path(
    get,
    path = routes::PATHWAY_ITEM,
    params(
        ("pathway_id" = String, Path, description = "PathwayID to match exactly")
    ),
    responses(
        (status = 200, description = "Matching pathway", body = Envelope),
        (status = 204, description = "No pathway with this id", body = Envelope),
        (status = 400, description = "Store error", body = Envelope)
    ),
    tag = "pathways"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(pathway_id): Path<String>,
) -> Result<Envelope, ApiError> {
    tracing::debug!("Route /pathways GET {}", pathway_id);

    let rows = state.store.find_pathway(&pathway_id).await.map_err(|err| {
        tracing::error!("Failed to read pathway {}: {}", pathway_id, err);
        ApiError::from_store(err, state.policy())
    })?;

    if rows.is_empty() {
        tracing::info!("No pathway rows for id: {}", pathway_id);
    } else {
        tracing::info!("Rows returned: {}", rows.len());
    }
    Ok(Envelope::rows(rows))
}
