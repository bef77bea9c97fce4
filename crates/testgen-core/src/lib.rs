//! Core types for the testgen service.
//!
//! This crate holds everything that does not touch the network: the request
//! and response model, the Gemini content-part model, the prompt template and
//! the scenario extractor that scrapes a markdown table out of model output.

/// Request/response and Gemini wire types
pub mod models;

/// Prompt template
pub mod prompt;

/// Markdown table scraping
pub mod extractor;

// Re-export key types
pub use extractor::{extract_scenarios, extract_scenarios_from_text};
pub use models::{
    Candidate, Content, FeatureRequest, GeminiApiError, GenerationRequest, GenerationResponse,
    Part, TestScenario, TestScenarioResponse,
};
pub use prompt::build_prompt;
