//! Testing utilities for the testgen server.
//!
//! A router-level test client and canned Gemini responses served through
//! wiremock.

pub mod client;
pub mod error;
pub mod gemini;

pub use client::{TestClient, TestResponse};
pub use error::TestError;
pub use gemini::GeminiStub;
