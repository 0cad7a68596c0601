use crate::error::{ApiError, ErrorResponse};
use crate::handlers::parse_note_id;
use crate::models::Note;
use crate::routes;
use crate::shaping::{truncate_content, wants_full_response, Shaped};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

/// GET /notes/{id} handler - Retrieve a note
///
/// A missing note is answered with 204, not 404.
#[utoipa::path(
    get,
    path = routes::NOTE_ITEM,
    params(
        ("id" = i64, Path, description = "Note id")
    ),
    responses(
        (status = 200, description = "The note as JSON, or its truncated content as text/plain when the full-response header is absent", body = Note),
        (status = 204, description = "No note with this id"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 500, description = "Unexpected error", body = ErrorResponse)
    ),
    tag = "notes"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let id = parse_note_id(&id_str)?;

    let Some(note) = state.store.get(id) else {
        tracing::info!("Note not found with id: {}", id);
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    tracing::info!("Successfully retrieved note with id: {}", id);

    if wants_full_response(&headers, &state.config.full_response_header) {
        return Ok(Shaped::Full(note).into_response());
    }

    let preview = truncate_content(&note.content, state.config.preview_length);
    Ok(Shaped::<Note>::Preview(preview).into_response())
}
