pub mod health;
pub mod list;
pub mod create;
pub mod get;
pub mod update;
pub mod delete;

pub use health::health_handler;
pub use list::list_handler;
pub use create::create_handler;
pub use get::get_handler;
pub use update::update_handler;
pub use delete::delete_handler;

use crate::error::ApiError;

/// Parse a path id, mapping anything that is not an integer to a 400
fn parse_note_id(id_str: &str) -> Result<i64, ApiError> {
    id_str
        .parse::<i64>()
        .map_err(|_| ApiError::InvalidId(id_str.to_string()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::Config;
    use crate::routes;
    use crate::state::AppState;
    use crate::store::NoteStore;
    use axum::{
        body::{Body, Bytes},
        http::{HeaderName, Request, StatusCode},
        Router,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    pub const FULL_HEADER: &str = "x-full-response";

    pub fn setup_test_app() -> (Router, NoteStore) {
        let config = Config {
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
            full_response_header: HeaderName::from_static(FULL_HEADER),
            preview_length: 5,
        };

        let store = NoteStore::new();
        let state = AppState {
            store: store.clone(),
            config: Arc::new(config),
        };

        (routes::router(state), store)
    }

    /// Send one request through the router and collect status and body
    pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    }

    pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    pub fn full_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .header(FULL_HEADER, "1")
            .body(Body::empty())
            .unwrap()
    }
}
