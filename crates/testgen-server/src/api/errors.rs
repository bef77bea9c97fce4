//! Error handling for the testgen API
//!
//! This module contains standardized error handling for the API.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;

use crate::error::ServerError;

/// API Error type for returning standard error responses
#[derive(Debug)]
pub enum ApiError {
    /// Internal server error (500)
    InternalServerError(String),
    /// Wrapped server error
    ServerError(ServerError),
}

impl From<ServerError> for ApiError {
    fn from(err: ServerError) -> Self {
        ApiError::ServerError(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            ApiError::ServerError(err) => write!(f, "Server Error: {}", err),
        }
    }
}

impl ApiError {
    /// Status code, error code and caller-facing message
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ERR_INTERNAL_SERVER_ERROR",
                msg.clone(),
            ),
            ApiError::ServerError(err @ ServerError::InvalidRequest(_)) => {
                (StatusCode::BAD_REQUEST, "ERR_INVALID_REQUEST", err.to_string())
            }
            ApiError::ServerError(err) if err.is_upstream_error() => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ERR_UPSTREAM_ERROR",
                format!("Error calling Gemini API: {}", err),
            ),
            ApiError::ServerError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ERR_INTERNAL_SERVER_ERROR",
                err.to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code, message) = self.parts();

        if status.is_server_error() {
            error!(error = ?self, "Request failed");
        }

        let body = Json(json!({
            "error": message,
            "errorDetails": {
                "errorCode": error_code,
                "errorMessage": message,
            }
        }));

        (status, body).into_response()
    }
}
