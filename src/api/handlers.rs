//! API request handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::{info, instrument};

use crate::user::{User, validation};

use super::error::{ApiError, ApiResult};
use super::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List all registered users in insertion order.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list().await)
}

/// Register a new user.
///
/// The candidate record runs through the full validation pipeline; on any
/// violation the request is rejected with the complete ordered message list
/// and the store is left untouched. Accepted records are stored exactly as
/// submitted.
#[instrument(skip(state, user))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> ApiResult<StatusCode> {
    let violations = validation::validate(&user);
    if !violations.is_empty() {
        return Err(ApiError::validation(violations));
    }

    state.users.append(user).await;
    let total = state.users.count().await;
    info!(total, "registered new user");

    Ok(StatusCode::CREATED)
}
