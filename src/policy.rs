use axum::http::StatusCode;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which status codes successful writes report.
///
/// `Documented` follows the REST verb table the service publishes
/// (PUT 204, DELETE 200, duplicate POST 409). `Legacy` reproduces the codes
/// older clients were built against (201 for every successful write, 400 for
/// duplicates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    #[default]
    Documented,
    Legacy,
}

#[derive(Debug, Error)]
#[error("unknown status policy '{0}', expected 'documented' or 'legacy'")]
pub struct UnknownPolicy(String);

impl StatusPolicy {
    pub fn created(self) -> StatusCode {
        StatusCode::CREATED
    }

    pub fn updated(self) -> StatusCode {
        match self {
            StatusPolicy::Documented => StatusCode::NO_CONTENT,
            StatusPolicy::Legacy => StatusCode::CREATED,
        }
    }

    pub fn deleted(self) -> StatusCode {
        match self {
            StatusPolicy::Documented => StatusCode::OK,
            StatusPolicy::Legacy => StatusCode::CREATED,
        }
    }

    /// Status for an insert rejected by a unique key.
    pub fn duplicate(self) -> StatusCode {
        match self {
            StatusPolicy::Documented => StatusCode::CONFLICT,
            StatusPolicy::Legacy => StatusCode::BAD_REQUEST,
        }
    }
}

impl FromStr for StatusPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "documented" => Ok(StatusPolicy::Documented),
            "legacy" => Ok(StatusPolicy::Legacy),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusPolicy::Documented => f.write_str("documented"),
            StatusPolicy::Legacy => f.write_str("legacy"),
        }
    }
}
