use crate::error::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// The store lives in memory, so a running process is a healthy one.
/// Reports the current note count alongside the status.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let notes = state.store.len();
    tracing::debug!("Health check passed ({} notes)", notes);

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            notes,
        }),
    )
}
