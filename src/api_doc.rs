use utoipa::OpenApi;

use crate::handlers;
use crate::models::{Envelope, HealthResponse, NewPathway, PathwayChanges, UnhealthyResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "pathways-api",
        version = "1.0.0",
        description = "CRUD access to the pathways table and the registration results report, \
                       backed by MySQL"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::update::update_collection_handler,
        handlers::delete::delete_handler,
        handlers::delete::delete_collection_handler,
        handlers::procedure::procedure_delete_handler,
        handlers::registration::registration_results_handler
    ),
    components(
        schemas(
            Envelope,
            NewPathway,
            PathwayChanges,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "pathways", description = "Pathway create, read, update and delete"),
        (name = "reports", description = "Read-only reports")
    )
)]
pub struct ApiDoc;
