use crate::error::{ApiError, ErrorResponse};
use crate::models::{Note, NoteRequest};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

/// POST /notes handler - Create a note
///
/// The store assigns the id. A body that cannot be read as a note request
/// is treated like any other failure and answered with the generic 500.
#[utoipa::path(
    post,
    path = routes::NOTES,
    request_body = NoteRequest,
    responses(
        (status = 201, description = "Note created", body = Note),
        (status = 500, description = "Note could not be created", body = ErrorResponse)
    ),
    tag = "notes"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<NoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let Json(request) = payload
        .map_err(|e| anyhow::anyhow!("Failed to read note request: {}", e.body_text()))?;

    let note = state.store.create(request.title, request.content);

    tracing::info!("Successfully created note with id: {}", note.id);
    Ok((StatusCode::CREATED, Json(note)))
}
