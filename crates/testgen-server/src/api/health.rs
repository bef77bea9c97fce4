//! Health check endpoint

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::debug;

/// Health check handler
///
/// Reports liveness only. The generation API is not probed, since every
/// probe would spend quota.
pub async fn health_check() -> impl IntoResponse {
    debug!("Health check requested");

    (
        StatusCode::OK,
        Json(json!({
            "status": "UP",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
