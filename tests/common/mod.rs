//! Test utilities and common setup.

use axum::Router;
use registrar::api::{self, AppState};
use registrar::config::Config;

/// Create a test application with default configuration and a fresh store.
pub fn test_app() -> Router {
    let state = AppState::new(Config::default());
    api::create_router(state)
}
