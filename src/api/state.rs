//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::user::UserStore;

/// Application state shared across all handlers.
///
/// The store is constructed here and injected into handlers through axum's
/// `State` extractor; there is no module-level shared state.
#[derive(Clone)]
pub struct AppState {
    /// Accepted user records, kept for the lifetime of the process.
    pub users: Arc<UserStore>,
    /// Server configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state with an empty store.
    pub fn new(config: Config) -> Self {
        Self {
            users: Arc::new(UserStore::new()),
            config: Arc::new(config),
        }
    }
}
