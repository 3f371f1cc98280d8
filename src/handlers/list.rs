use crate::error::ApiError;
use crate::models::Envelope;
use crate::routes;
use crate::state::AppState;
use axum::extract::State;

/// GET /pathways handler - List every pathway ordered by name
///
/// Returns 200 with all rows, or 204 with an empty `rows` list when the
/// table is empty.
#[utoipa::path(
    get,
    path = routes::PATHWAYS,
    responses(
        (status = 200, description = "All pathways ordered by name", body = Envelope),
        (status = 204, description = "No pathways stored", body = Envelope),
        (status = 400, description = "Store error", body = Envelope)
    ),
    tag = "pathways"
)]
pub async fn list_handler(State(state): State<AppState>) -> Result<Envelope, ApiError> {
    tracing::debug!("Route /pathways GET");

    let rows = state.store.list_pathways().await.map_err(|err| {
        tracing::error!("Failed to list pathways: {}", err);
        ApiError::from_store(err, state.policy())
    })?;

    if rows.is_empty() {
        tracing::info!("No pathway rows");
    } else {
        tracing::info!("Rows returned: {}", rows.len());
    }
    Ok(Envelope::rows(rows))
}
