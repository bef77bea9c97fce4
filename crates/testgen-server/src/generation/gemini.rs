//! Gemini implementation of the GenerationClient

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use testgen_core::{GenerationRequest, GenerationResponse};

use super::GenerationClient;
use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Gemini `generateContent` endpoint
#[derive(Clone)]
pub struct GeminiClient {
    /// Endpoint URL
    api_url: String,

    /// API key
    api_key: String,

    /// HTTP client, pooled connections are reused across calls
    client: Client,
}

impl GeminiClient {
    /// Create a new GeminiClient. No timeout is set beyond transport defaults.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> ServerResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ServerError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Create a client from server configuration
    pub fn from_config(config: &ServerConfig) -> ServerResult<Self> {
        Self::new(config.gemini_api_url.clone(), config.gemini_api_key.clone())
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    #[instrument(skip(self, request), fields(api_url = %self.api_url))]
    async fn generate(&self, request: &GenerationRequest) -> ServerResult<GenerationResponse> {
        let response = self
            .client
            .post(&self.api_url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ServerError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ServerError::NetworkError(e.to_string()))?;
        debug!(%status, bytes = body.len(), "Received generation response");

        let decoded: GenerationResponse = serde_json::from_slice(&body)
            .map_err(|e| ServerError::DecodeError(e.to_string()))?;

        if let Some(api_error) = decoded.error {
            warn!(%status, code = api_error.code, "Generation API returned an error");
            return Err(ServerError::UpstreamError(format!(
                "{} ({})",
                api_error.message, api_error.status
            )));
        }

        if !status.is_success() {
            warn!(%status, "Generation API returned a non-success status without an error body");
        }

        Ok(decoded)
    }
}
