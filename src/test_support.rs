//! Router harness shared by the handler tests.

use crate::config::Config;
use crate::models::Envelope;
use crate::policy::StatusPolicy;
use crate::routes;
use crate::state::AppState;
use crate::store::memory::MemoryStore;
use axum::{body::Body, http::Request, http::StatusCode, Router};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tower::ServiceExt;

pub fn test_config(status_policy: StatusPolicy) -> Config {
    Config {
        db_host: "localhost".to_string(),
        db_port: 3306,
        db_user: "root".to_string(),
        db_password: String::new(),
        db_name: "alumni".to_string(),
        db_max_connections: 1,
        service_host: "127.0.0.1".to_string(),
        service_port: 8080,
        status_policy,
    }
}

pub fn setup_test_app(store: MemoryStore, policy: StatusPolicy) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(store);
    let state = AppState::new(store.clone(), Arc::new(test_config(policy)));
    (routes::router(state), store)
}

/// Send one request; the envelope is `None` only when the body is empty.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, Option<Envelope>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if bytes.is_empty() {
        return (status, None);
    }
    let envelope: Envelope = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(envelope.status_code, status.as_u16(), "statusCode must mirror HTTP status");
    (status, Some(envelope))
}
