use crate::config::Config;
use crate::policy::StatusPolicy;
use crate::store::PathwayStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PathwayStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn PathwayStore>, config: Arc<Config>) -> Self {
        Self { store, config }
    }

    pub fn policy(&self) -> StatusPolicy {
        self.config.status_policy
    }
}
