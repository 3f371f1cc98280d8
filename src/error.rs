use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::Envelope;
use crate::policy::StatusPolicy;
use crate::store::StoreError;

pub const UNSUPPORTED_REQUEST: &str = "Unsupported request";

/// Failures returned by the pathways routes.
///
/// Every variant renders as an `Envelope` whose `statusCode` matches the
/// HTTP status. Messages are free text; clients should branch on the status.
#[derive(Debug)]
pub enum ApiError {
    /// Statement failed in the store; message is the store's own
    Store(StoreError),
    /// Insert collided with an existing key
    Conflict(String),
    /// Required body field absent or blank
    MissingData(&'static str),
    /// Body is not the expected JSON
    InvalidBody(String),
    /// Collection-level PUT or DELETE
    CollectionNotAllowed(&'static str),
    /// Write addressed an id the store does not have
    UnknownId(String),
    /// No route for this method and path
    Unsupported,
}

impl ApiError {
    /// Map a store failure, reporting duplicates with the policy's code.
    pub fn from_store(err: StoreError, policy: StatusPolicy) -> Self {
        match err {
            StoreError::Duplicate(message) if policy.duplicate() == StatusCode::CONFLICT => {
                ApiError::Conflict(message)
            }
            err => ApiError::Store(err),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::MissingData(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::CollectionNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnknownId(_) => StatusCode::NOT_FOUND,
            ApiError::Unsupported => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Store(err) => err.to_string(),
            ApiError::Conflict(message) => message.clone(),
            ApiError::MissingData(message) => message.to_string(),
            ApiError::InvalidBody(message) => message.clone(),
            ApiError::CollectionNotAllowed(message) => message.to_string(),
            ApiError::UnknownId(id) => format!("Unknown ID: {}", id),
            ApiError::Unsupported => UNSUPPORTED_REQUEST.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Envelope::failure(self.status(), self.message()).into_response()
    }
}

impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}
