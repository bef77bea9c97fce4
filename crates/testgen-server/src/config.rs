//! Configuration for the testgen server
//!
//! This module contains the configuration type and loading functionality.
//! Everything is read once at startup and passed explicitly into the server.

use std::env;
use tracing::{info, warn};

use crate::error::{ServerError, ServerResult};

/// Gemini `generateContent` endpoint used unless `GEMINI_API_URL` is set
pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-8b:generateContent";

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub bind_address: String,

    /// API key sent as `x-goog-api-key`
    pub gemini_api_key: String,

    /// Generation endpoint
    pub gemini_api_url: String,

    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
}

fn default_port() -> u16 {
    5001 // local development port
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ServerConfig {
    /// Config with defaults for everything except the API key
    pub fn new(gemini_api_key: impl Into<String>) -> Self {
        Self {
            port: default_port(),
            bind_address: default_host(),
            gemini_api_key: gemini_api_key.into(),
            gemini_api_url: DEFAULT_GEMINI_API_URL.to_string(),
            log_level: default_log_level(),
        }
    }

    /// Load configuration from environment variables
    pub fn load() -> ServerResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ServerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(ServerError::ConfigError(
                "GEMINI_API_KEY environment variable is required".to_string(),
            ));
        }

        let mut config = Self::new(api_key);

        if let Some(port) = lookup("PORT").filter(|p| !p.is_empty()) {
            if let Ok(port) = port.parse::<u16>() {
                config.port = port;
            } else {
                warn!("Invalid PORT value: {}", port);
            }
        }

        if let Some(host) = lookup("SERVER_HOST").filter(|h| !h.is_empty()) {
            config.bind_address = host;
        }

        if let Some(url) = lookup("GEMINI_API_URL").filter(|u| !u.is_empty()) {
            config.gemini_api_url = url;
        }

        if let Some(log_level) = lookup("LOG_LEVEL").filter(|l| !l.is_empty()) {
            config.log_level = log_level;
        }

        info!("Loaded server configuration");
        Ok(config)
    }
}

/// Manual Debug implementation that keeps the API key out of logs
impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("bind_address", &self.bind_address)
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_api_url", &self.gemini_api_url)
            .field("log_level", &self.log_level)
            .finish()
    }
}
