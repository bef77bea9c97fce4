//! Main testgen server implementation
//!
//! This module contains the TestGenServer implementation: one request path
//! from feature description to prompt, prompt to model text, and model text to
//! scenarios.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use testgen_core::{
    build_prompt, extract_scenarios_from_text, FeatureRequest, GenerationRequest,
    TestScenarioResponse,
};

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::generation::GenerationClient;

/// Main server implementation
#[derive(Clone)]
pub struct TestGenServer {
    /// Configuration
    pub config: ServerConfig,

    /// Generation API client
    client: Arc<dyn GenerationClient>,
}

/// Manual Debug implementation that doesn't try to debug the trait object
impl std::fmt::Debug for TestGenServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestGenServer")
            .field("config", &self.config)
            .finish()
    }
}

impl TestGenServer {
    /// Create a new TestGenServer
    pub fn new(config: ServerConfig, client: Arc<dyn GenerationClient>) -> Self {
        Self { config, client }
    }

    /// Bind the configured address and serve until the process is stopped
    pub async fn run(self) -> ServerResult<()> {
        let listener =
            TcpListener::bind((self.config.bind_address.as_str(), self.config.port)).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(self, listener: TcpListener) -> ServerResult<()> {
        let addr = listener.local_addr()?;
        info!("Server starting on http://{}", addr);

        let app = crate::api::build_router(Arc::new(self));
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Prompt the model for a feature and scrape its answer into scenarios.
    ///
    /// Any client error is returned as-is; an answer with no table rows is
    /// an empty list, not an error.
    pub async fn generate_test_cases(
        &self,
        feature: &FeatureRequest,
    ) -> ServerResult<TestScenarioResponse> {
        let request = GenerationRequest::from_prompt(build_prompt(feature));

        let response = self.client.generate(&request).await?;

        let Some(text) = response.text() else {
            warn!(feature = %feature.feature_name, "Generation response had no candidate text");
            return Ok(TestScenarioResponse::default());
        };

        let scenarios = extract_scenarios_from_text(&text);
        debug!(
            feature = %feature.feature_name,
            count = scenarios.len(),
            "Generated test scenarios"
        );

        Ok(TestScenarioResponse::from(scenarios))
    }
}
