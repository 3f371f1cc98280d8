use crate::error::ApiError;
use crate::models::Envelope;
use crate::routes;
use crate::state::AppState;
use crate::store::{StoreError, WriteOutcome};
use axum::extract::{Path, State};

/// DELETE /pathways/{pathway_id} handler - Remove one pathway
#[utoipa::path(
    delete,
    path = routes::PATHWAY_ITEM,
    params(
        ("pathway_id" = String, Path, description = "PathwayID of the row to delete")
    ),
    responses(
        (status = 200, description = "Pathway deleted (documented policy)", body = Envelope),
        (status = 201, description = "Pathway deleted (legacy policy)", body = Envelope),
        (status = 400, description = "Store error", body = Envelope),
        (status = 404, description = "No pathway with this id", body = Envelope)
    ),
    tag = "pathways"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(pathway_id): Path<String>,
) -> Result<Envelope, ApiError> {
    tracing::debug!("Route /pathways DELETE {}", pathway_id);
    let result = state.store.delete_pathway(&pathway_id).await;
    deleted(&state, pathway_id, result)
}

/// DELETE /pathways and DELETE /sp handler - Deleting a whole collection is not supported
#[utoipa::path(
    delete,
    path = routes::PATHWAYS,
    responses(
        (status = 405, description = "Delete entire collection not allowed", body = Envelope)
    ),
    tag = "pathways"
)]
pub async fn delete_collection_handler() -> ApiError {
    tracing::debug!("Route DELETE (collection)");
    ApiError::CollectionNotAllowed("Delete entire collection not allowed")
}

/// Shared response for both delete routes: 404 when nothing was removed.
pub(crate) fn deleted(
    state: &AppState,
    id: String,
    result: Result<WriteOutcome, StoreError>,
) -> Result<Envelope, ApiError> {
    let outcome = result.map_err(|err| {
        tracing::error!("Failed to delete {}: {}", id, err);
        ApiError::from_store(err, state.policy())
    })?;

    if outcome.rows_affected == 0 {
        tracing::info!("Unknown ID: {}", id);
        return Err(ApiError::UnknownId(id));
    }

    tracing::info!("Delete ID: {}", id);
    Ok(Envelope::written(state.policy().deleted(), id))
}
