use axum::{
    http::{HeaderMap, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// A read response in one of its two forms
///
/// `Full` is the structured payload as JSON. `Preview` is the truncated
/// content of a single note as plain text.
#[derive(Debug)]
pub enum Shaped<T> {
    Full(T),
    Preview(String),
}

impl<T: Serialize> IntoResponse for Shaped<T> {
    fn into_response(self) -> Response {
        match self {
            Shaped::Full(payload) => (StatusCode::OK, Json(payload)).into_response(),
            Shaped::Preview(text) => (StatusCode::OK, text).into_response(),
        }
    }
}

/// Whether the request asks for the full payload; only presence matters
pub fn wants_full_response(headers: &HeaderMap, header: &HeaderName) -> bool {
    headers.contains_key(header)
}

/// First `max` characters of `content`, or all of it when shorter
pub fn truncate_content(content: &str, max: usize) -> String {
    content.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_truncate_shorter_than_limit() {
        assert_eq!(truncate_content("hello", 30), "hello");
    }

    #[test]
    fn test_truncate_longer_than_limit() {
        assert_eq!(truncate_content("hello world", 5), "hello");
    }

    #[test]
    fn test_truncate_zero() {
        assert_eq!(truncate_content("hello", 0), "");
        assert_eq!(truncate_content("", 10), "");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_content("привет мир", 6), "привет");
        assert_eq!(truncate_content("日本語テキスト", 3), "日本語");
    }

    #[test]
    fn test_header_presence_ignores_value_and_case() {
        let header = HeaderName::from_static("x-full-response");
        let mut headers = HeaderMap::new();
        assert!(!wants_full_response(&headers, &header));

        headers.insert(
            HeaderName::from_bytes(b"X-Full-Response").unwrap(),
            HeaderValue::from_static(""),
        );
        assert!(wants_full_response(&headers, &header));
    }

    #[tokio::test]
    async fn test_preview_is_plain_text() {
        let response = Shaped::<()>::Preview("abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"abc");
    }

    #[tokio::test]
    async fn test_full_is_json() {
        let response = Shaped::Full(vec![1, 2, 3]).into_response();
        assert_eq!(response.headers()["content-type"], "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let payload: Vec<i32> = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload, vec![1, 2, 3]);
    }
}
