use serde::{Deserialize, Serialize};

/// A stored note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Request body for create and update operations
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NoteRequest {
    pub title: String,
    pub content: String,
}

/// Query parameters for the list endpoint
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive substring to match against title or content
    #[serde(rename = "searchString")]
    pub search_string: Option<String>,
}
