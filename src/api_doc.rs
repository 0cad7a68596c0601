use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{Note, NoteRequest};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "notes-service API",
        version = "1.0.0",
        description = "A minimal in-memory note-taking service"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Note,
            NoteRequest,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "notes", description = "Note operations")
    )
)]
pub struct ApiDoc;
