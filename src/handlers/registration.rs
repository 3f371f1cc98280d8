use crate::error::ApiError;
use crate::models::Envelope;
use crate::routes;
use crate::state::AppState;
use axum::extract::State;

/// GET /RegistrationResults handler - Read the registration results report
///
/// Collection only; rows come from the `vw_register_results` view ordered by
/// member name.
#[utoipa::path(
    get,
    path = routes::REGISTRATION_RESULTS,
    responses(
        (status = 200, description = "Registration results", body = Envelope),
        (status = 204, description = "Report is empty", body = Envelope),
        (status = 400, description = "Store error", body = Envelope)
    ),
    tag = "reports"
)]
pub async fn registration_results_handler(
    State(state): State<AppState>,
) -> Result<Envelope, ApiError> {
    tracing::debug!("Route /RegistrationResults GET");

    let rows = state.store.list_registration_results().await.map_err(|err| {
        tracing::error!("Failed to read registration results: {}", err);
        ApiError::from_store(err, state.policy())
    })?;

    if rows.is_empty() {
        tracing::info!("No registered rows");
    } else {
        tracing::info!("Rows returned: {}", rows.len());
    }
    Ok(Envelope::rows(rows))
}
