use crate::error::ApiError;
use crate::models::{present, Envelope, PathwayChanges};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

/// PUT /pathways/{pathway_id} handler - Rename a pathway
///
/// `PathwayName` is the only updatable field and must be present. Success
/// reports the configured status policy's update code.
#[utoipa::path(
    put,
    path = routes::PATHWAY_ITEM,
    params(
        ("pathway_id" = String, Path, description = "PathwayID of the row to update")
    ),
    request_body = PathwayChanges,
    responses(
        (status = 204, description = "Pathway updated (documented policy)", body = Envelope),
        (status = 201, description = "Pathway updated (legacy policy)", body = Envelope),
        (status = 400, description = "Data missing for update or store error", body = Envelope),
        (status = 404, description = "No pathway with this id", body = Envelope)
    ),
    tag = "pathways"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(pathway_id): Path<String>,
    payload: Result<Json<PathwayChanges>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    let Json(changes) = payload?;
    tracing::debug!("Route /pathways PUT {} {:?}", pathway_id, changes.pathway_name);

    let Some(pathway_name) = present(changes.pathway_name.as_deref()) else {
        return Err(ApiError::MissingData("Data missing for update"));
    };

    let outcome = state
        .store
        .rename_pathway(&pathway_id, pathway_name)
        .await
        .map_err(|err| {
            tracing::error!("Failed to update pathway {}: {}", pathway_id, err);
            ApiError::from_store(err, state.policy())
        })?;

    if outcome.rows_affected == 0 {
        tracing::info!("Unknown ID: {}", pathway_id);
        return Err(ApiError::UnknownId(pathway_id));
    }

    tracing::info!("Update ID: {}", pathway_id);
    Ok(Envelope::written(state.policy().updated(), pathway_id))
}

/// PUT /pathways handler - Updating the whole collection is not supported
#[utoipa::path(
    put,
    path = routes::PATHWAYS,
    responses(
        (status = 405, description = "Update entire collection not allowed", body = Envelope)
    ),
    tag = "pathways"
)]
pub async fn update_collection_handler() -> ApiError {
    tracing::debug!("Route /pathways PUT (collection)");
    ApiError::CollectionNotAllowed("Update entire collection not allowed")
}
