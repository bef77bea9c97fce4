//! API module for the testgen server
//!
//! This module contains the API routes, handlers and middleware stack.

use axum::{
    http::{header, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod errors;
pub mod health;
pub mod scenarios;

use crate::server::TestGenServer;
use errors::ApiError;

/// Build the router for API endpoints
pub fn build_router(server: Arc<TestGenServer>) -> Router {
    Router::new()
        .route("/generate-test-cases", post(scenarios::generate_test_cases))
        // Health check
        .route("/health", get(health::health_check))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        // Shared state
        .with_state(server)
}

/// CORS policy, allow-all and always on.
///
/// Credentials cannot be combined with a wildcard origin, so they stay off.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers([header::LINK])
        .max_age(Duration::from_secs(300))
}

/// Turn a handler panic into a 500 instead of dropping the connection
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::InternalServerError(format!("Handler panicked: {}", detail)).into_response()
}

// Re-export handlers for easier imports
pub use health::*;
pub use scenarios::*;
