//! HTTP API module.
//!
//! Provides the REST endpoints for registering and listing users.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
