//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::StargazeError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Engine error, mapped by variant
    Engine(StargazeError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg)),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Engine(e) => engine_error(e),
        };

        (status, Json(error)).into_response()
    }
}

fn engine_error(err: StargazeError) -> (StatusCode, ApiError) {
    let details = err.context().map(|c| c.to_string());
    let (status, code, message) = match err {
        StargazeError::NotFound(reason) => (StatusCode::NOT_FOUND, "NOT_FOUND", reason.to_string()),
        StargazeError::InvalidInput { message, .. } => (StatusCode::BAD_REQUEST, "BAD_REQUEST", message),
        StargazeError::Unavailable { message, .. } => {
            (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE", message)
        }
        StargazeError::Configuration { message, .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR", message)
        }
        StargazeError::Io { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR", message),
    };

    let mut body = ApiError::new(code, message);
    if let Some(details) = details {
        body = body.with_details(details);
    }
    (status, body)
}

impl From<StargazeError> for AppError {
    fn from(err: StargazeError) -> Self {
        AppError::Engine(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
