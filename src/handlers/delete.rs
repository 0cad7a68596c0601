use crate::error::{ApiError, ErrorResponse};
use crate::handlers::parse_note_id;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// DELETE /notes/{id} handler - Remove a note
///
/// Responds with `true` when a note was removed and `false` when there was
/// nothing to remove.
#[utoipa::path(
    delete,
    path = routes::NOTE_ITEM,
    params(
        ("id" = i64, Path, description = "Note id")
    ),
    responses(
        (status = 200, description = "Whether a note was removed", body = bool),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 500, description = "Unexpected error", body = ErrorResponse)
    ),
    tag = "notes"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<bool>), ApiError> {
    let id = parse_note_id(&id_str)?;

    let removed = state.store.delete(id);

    tracing::info!("Delete of note {} removed: {}", id, removed);
    Ok((StatusCode::OK, Json(removed)))
}
