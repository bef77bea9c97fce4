use thiserror::Error;

/// Error types for the test utilities
#[derive(Debug, Error)]
pub enum TestError {
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request could not be built or executed
    #[error("Request error: {0}")]
    Request(String),

    /// Response body could not be read
    #[error("Body error: {0}")]
    Body(String),
}
