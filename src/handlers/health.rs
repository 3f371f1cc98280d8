use crate::models::{HealthResponse, UnhealthyResponse};
use crate::routes;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// GET /health handler - Database reachability
///
/// 200 with `healthy` when `SELECT 1` succeeds, otherwise 503 carrying the
/// store's message. Not wrapped in the pathways envelope.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = UnhealthyResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> Response {
    tracing::debug!("Route /health GET");

    if let Err(err) = state.store.health_check().await {
        tracing::error!("Health check failed: {}", err);
        let body = UnhealthyResponse {
            status: "unhealthy".to_string(),
            error: format!("Cannot connect to database: {}", err),
        };
        return (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response();
    }

    let body = HealthResponse {
        status: "healthy".to_string(),
    };
    (StatusCode::OK, Json(body)).into_response()
}
