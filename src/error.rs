use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Body returned for every error status
pub const GENERIC_ERROR: &str = "Something has gone wrong";

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub notes: usize,
}

/// Custom error type for API endpoints
///
/// Maps each failure to its HTTP status and a JSON body. Internal errors
/// are logged with their cause but answered with a generic message only.
#[derive(Debug)]
pub enum ApiError {
    /// Path id that is not an integer
    InvalidId(String),
    /// Query string that could not be parsed
    InvalidQueryParam(String),
    /// Update of an id that does not exist
    NoteNotFound(i64),
    /// Anything unexpected
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid note id: expected an integer, got '{}'", id),
            ),
            ApiError::InvalidQueryParam(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid query parameter: {}", msg),
            ),
            ApiError::NoteNotFound(id) => {
                (StatusCode::BAD_REQUEST, format!("No such note: {}", id))
            }
            ApiError::Internal(err) => {
                tracing::error!("Request failed: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

/// Turn a handler panic into the generic 500 body
pub fn panic_response(_panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    ApiError::Internal(anyhow::anyhow!("handler panicked")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn into_parts(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_id_is_bad_request() {
        let (status, body) = into_parts(ApiError::InvalidId("abc".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("'abc'"));
    }

    #[tokio::test]
    async fn test_not_found_is_bad_request() {
        let (status, body) = into_parts(ApiError::NoteNotFound(12)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "No such note: 12");
    }

    #[tokio::test]
    async fn test_internal_does_not_leak_cause() {
        let err = ApiError::from(anyhow::anyhow!("secret detail"));
        let (status, body) = into_parts(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, GENERIC_ERROR);
    }
}
