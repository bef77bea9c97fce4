//! Test scenario generation endpoint

use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;
use tracing::{debug, info};

use testgen_core::{FeatureRequest, TestScenarioResponse};

use crate::api::errors::ApiError;
use crate::error::ServerError;
use crate::server::TestGenServer;

/// Handler for `POST /generate-test-cases`
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// that any undecodable body, whatever its content type, is a 400 with the
/// same message.
pub async fn generate_test_cases(
    State(server): State<Arc<TestGenServer>>,
    body: Bytes,
) -> Result<Json<TestScenarioResponse>, ApiError> {
    // A literal `null` body decodes to a feature with empty fields
    let feature: FeatureRequest = serde_json::from_slice::<Option<FeatureRequest>>(&body)
        .map_err(|e| {
            debug!(error = %e, "Rejecting undecodable request body");
            ServerError::InvalidRequest(e.to_string())
        })?
        .unwrap_or_default();

    info!(feature = %feature.feature_name, "Generating test cases");

    let response = server.generate_test_cases(&feature).await?;
    Ok(Json(response))
}
