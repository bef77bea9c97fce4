//! Generation API integration
//!
//! This module contains the outbound client for the generative-language API.

use async_trait::async_trait;
use std::fmt::Debug;

use testgen_core::{GenerationRequest, GenerationResponse};

use crate::error::ServerResult;

/// Interface for generative-language calls
#[async_trait]
pub trait GenerationClient: Send + Sync + Debug {
    /// Send one request and return the decoded response
    async fn generate(&self, request: &GenerationRequest) -> ServerResult<GenerationResponse>;
}

pub mod gemini;

pub use gemini::GeminiClient;
