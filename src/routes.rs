use axum::{routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::error::panic_response;
use crate::handlers;
use crate::state::AppState;

// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const NOTES: &str = "/notes";
pub const NOTE_ITEM: &str = "/notes/{id}";

pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the full application router
///
/// Panics inside a handler are caught and answered with the generic 500
/// body, and every request is traced.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
        .route(HEALTH, get(handlers::health_handler))
        .route(
            NOTES,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            NOTE_ITEM,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
