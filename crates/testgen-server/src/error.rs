//! Error types for the testgen server
//!
//! This module contains the error types used throughout the server.

use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// Inbound body could not be decoded
    #[error("Invalid request body")]
    InvalidRequest(String),

    /// Connecting to, sending to or reading from the generation API failed
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Generation API body was not valid JSON for the response shape
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Generation API answered with its error envelope
    #[error("Upstream error: {0}")]
    UpstreamError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::InternalError(format!("IO error: {}", err))
    }
}

impl ServerError {
    /// Whether the failure came from the outbound generation call
    pub fn is_upstream_error(&self) -> bool {
        matches!(
            self,
            ServerError::NetworkError(_) | ServerError::DecodeError(_) | ServerError::UpstreamError(_)
        )
    }
}
