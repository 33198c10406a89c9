//! Unified API error handling with structured responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

/// API error type with structured responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more validation rules failed for the submitted record.
    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<String>),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(violations: Vec<String>) -> Self {
        Self::Validation(violations)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body of a validation failure response: the full ordered message list.
#[derive(Debug, Serialize)]
struct ValidationResponse {
    errors: Vec<String>,
}

/// Structured error response for non-validation failures.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            // Validation failures are client errors, never server faults.
            ApiError::Validation(errors) => {
                debug!(violations = errors.len(), "rejected invalid record");
                (status, Json(ValidationResponse { errors })).into_response()
            }
            ApiError::Internal(msg) => {
                error!(message = %msg, "API error");
                let body = ErrorResponse {
                    error: msg,
                    code: "INTERNAL_ERROR",
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
