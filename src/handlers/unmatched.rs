use crate::error::ApiError;
use axum::http::{Method, Uri};

/// Fallback for every method/path pair without a route
pub async fn unmatched_handler(method: Method, uri: Uri) -> ApiError {
    tracing::debug!("Unmatched route: {} {}", method, uri);
    ApiError::Unsupported
}
