//! Error types and error handling for the development proxy
//!
//! This module defines the proxy's error type and its conversion to HTTP
//! responses. All errors implement `IntoResponse` to provide consistent
//! error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types for the proxy server
///
/// Each variant implements automatic conversion to HTTP responses via
/// `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request path is not under a proxied prefix
    #[error("No proxy route for path: {0}")]
    RouteNotFound(String),

    /// Forwarding the request to the backend failed
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The backend produced a response the proxy could not relay
    #[error("Invalid upstream response: {0}")]
    InvalidUpstream(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::RouteNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Upstream(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::InvalidUpstream(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
