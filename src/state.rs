use crate::config::Config;
use crate::store::NoteStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: NoteStore,
    pub config: Arc<Config>,
}
