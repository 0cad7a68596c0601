use crate::error::{ApiError, ErrorResponse};
use crate::models::{ListQuery, Note};
use crate::routes;
use crate::shaping::{truncate_content, wants_full_response, Shaped};
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

/// GET /notes handler - List or search notes
///
/// Without `searchString` (or with an empty one) every note is returned,
/// otherwise only notes whose title or content contains it, ignoring case.
/// An empty result is answered with 204. When the configured header is
/// present the matching notes are returned as JSON; otherwise the body is
/// the first match's content, truncated, as plain text.
#[utoipa::path(
    get,
    path = routes::NOTES,
    params(ListQuery),
    responses(
        (status = 200, description = "Matching notes as JSON, or the truncated content of the first match as text/plain when the full-response header is absent", body = Vec<Note>),
        (status = 204, description = "No notes matched"),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Unexpected error", body = ErrorResponse)
    ),
    tag = "notes"
)]
pub async fn list_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidQueryParam(e.body_text()))?;

    let notes = match query.search_string.as_deref() {
        None | Some("") => state.store.all(),
        Some(search) => state.store.search(search),
    };

    if notes.is_empty() {
        tracing::info!("No notes matched (search: {:?})", query.search_string);
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    tracing::info!(
        "Listed {} notes (search: {:?})",
        notes.len(),
        query.search_string
    );

    if wants_full_response(&headers, &state.config.full_response_header) {
        return Ok(Shaped::Full(notes).into_response());
    }

    let first = &notes[0];
    let preview = truncate_content(&first.content, state.config.preview_length);
    Ok(Shaped::<Vec<Note>>::Preview(preview).into_response())
}
