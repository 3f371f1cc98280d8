use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::Record;

pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Uniform response body returned by every pathways route.
///
/// `statusCode` always mirrors the HTTP status of the response. Reads carry
/// `rows`, successful writes carry `id`, failures carry neither.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub error: String,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub rows: Option<Vec<Record>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Envelope {
    /// Read result: 200 with the rows, or 204 with an empty list when nothing matched.
    pub fn rows(rows: Vec<Record>) -> Self {
        let status = if rows.is_empty() {
            StatusCode::NO_CONTENT
        } else {
            StatusCode::OK
        };
        Self {
            error: String::new(),
            status_code: status.as_u16(),
            rows: Some(rows),
            id: None,
        }
    }

    pub fn written(status: StatusCode, id: impl Into<String>) -> Self {
        Self {
            error: String::new(),
            status_code: status.as_u16(),
            rows: None,
            id: Some(id.into()),
        }
    }

    pub fn failure(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status_code: status.as_u16(),
            rows: None,
            id: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (status, Json(self)).into_response();
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
        response
    }
}

/// Request body for POST /pathways/
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct NewPathway {
    #[serde(rename = "PathwayID")]
    pub pathway_id: Option<String>,
    #[serde(rename = "PathwayName")]
    pub pathway_name: Option<String>,
}

/// Request body for PUT /pathways/{id}; only the name can change
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct PathwayChanges {
    #[serde(rename = "PathwayName")]
    pub pathway_name: Option<String>,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Treat absent and blank strings alike.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
