//!
//! Testgen Server - turns feature descriptions into test scenario tables
//!
//! This module exports all the components of the testgen server.

use std::sync::Arc;

/// API module
pub mod api;

/// Server module
pub mod server;

/// Generation API client module
pub mod generation;

/// Configuration module
pub mod config;

/// Error module
pub mod error;

// Re-export key types
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use generation::{GeminiClient, GenerationClient};
pub use server::TestGenServer;

/// Run function
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    tracing::debug!(?config, "Starting with configuration");

    // Create dependencies
    let client = Arc::new(GeminiClient::from_config(&config)?);

    // Create and run server
    TestGenServer::new(config, client).run().await
}

/// Initialize logging. `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &ServerConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    // Create filter based on config
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // Initialize subscriber
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
