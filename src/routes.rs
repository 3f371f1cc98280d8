// Route path constants - single source of truth for all API paths

use axum::{
    routing::{delete, get},
    Router,
};

use crate::handlers;
use crate::state::AppState;

pub const HEALTH: &str = "/health";
pub const PATHWAYS: &str = "/pathways";
pub const PATHWAYS_SLASH: &str = "/pathways/";
pub const PATHWAY_ITEM: &str = "/pathways/{pathway_id}";
pub const REGISTRATION_RESULTS: &str = "/RegistrationResults";
pub const REGISTRATION_RESULTS_SLASH: &str = "/RegistrationResults/";
pub const PROCEDURE: &str = "/sp";
pub const PROCEDURE_SLASH: &str = "/sp/";
pub const PROCEDURE_ITEM: &str = "/sp/{alum_id}";

/// Build the service router.
///
/// Any method or path without a handler falls through to the
/// "Unsupported request" envelope, including known paths hit with the wrong
/// method.
pub fn router(state: AppState) -> Router {
    let pathways = || {
        get(handlers::list_handler)
            .post(handlers::create_handler)
            .put(handlers::update_collection_handler)
            .delete(handlers::delete_collection_handler)
    };

    Router::new()
        .route(HEALTH, get(handlers::health_handler))
        .route(PATHWAYS, pathways())
        .route(PATHWAYS_SLASH, pathways())
        .route(
            PATHWAY_ITEM,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .route(REGISTRATION_RESULTS, get(handlers::registration_results_handler))
        .route(REGISTRATION_RESULTS_SLASH, get(handlers::registration_results_handler))
        .route(PROCEDURE, delete(handlers::delete_collection_handler))
        .route(PROCEDURE_SLASH, delete(handlers::delete_collection_handler))
        .route(PROCEDURE_ITEM, delete(handlers::procedure_delete_handler))
        .fallback(handlers::unmatched_handler)
        .method_not_allowed_fallback(handlers::unmatched_handler)
        .with_state(state)
}
