use crate::error::{ApiError, ErrorResponse};
use crate::handlers::parse_note_id;
use crate::models::{Note, NoteRequest};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

/// PUT /notes/{id} handler - Replace a note's title and content
///
/// Updating an id that does not exist is a client error (400), unlike
/// reads where a missing note yields 204.
#[utoipa::path(
    put,
    path = routes::NOTE_ITEM,
    params(
        ("id" = i64, Path, description = "Note id")
    ),
    request_body = NoteRequest,
    responses(
        (status = 200, description = "Note updated", body = Note),
        (status = 400, description = "Invalid id or no such note", body = ErrorResponse),
        (status = 500, description = "Note could not be updated", body = ErrorResponse)
    ),
    tag = "notes"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<NoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let id = parse_note_id(&id_str)?;
    let Json(request) = payload
        .map_err(|e| anyhow::anyhow!("Failed to read note request: {}", e.body_text()))?;

    let note = state
        .store
        .update(id, request.title, request.content)
        .ok_or(ApiError::NoteNotFound(id))?;

    tracing::info!("Successfully updated note with id: {}", id);
    Ok((StatusCode::OK, Json(note)))
}
