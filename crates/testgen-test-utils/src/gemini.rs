//! Canned Gemini `generateContent` endpoint

use serde_json::{json, Value};
use testgen_core::TestScenario;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the stub answers on
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash-8b:generateContent";

/// API key the stub expects
pub const TEST_API_KEY: &str = "test-api-key";

/// A wiremock server standing in for the Gemini API
pub struct GeminiStub {
    server: MockServer,
}

impl GeminiStub {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Full endpoint URL to configure the client with
    pub fn api_url(&self) -> String {
        format!("{}{}", self.server.uri(), GENERATE_PATH)
    }

    /// Requests received so far
    pub async fn received_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }

    /// Requests received so far, decoded as JSON
    pub async fn received_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }

    /// Answer with a single candidate carrying `text`
    pub async fn respond_with_text(&self, text: &str) {
        self.respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(text)))
            .await;
    }

    /// Answer with an arbitrary response
    pub async fn respond_with(&self, template: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", TEST_API_KEY))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }
}

/// `generateContent` response body with one text candidate
pub fn candidate_body(text: &str) -> Value {
    json!({
        "candidates": [
            {
                "content": { "role": "model", "parts": [ { "text": text } ] },
                "finishReason": "STOP"
            }
        ]
    })
}

/// Render scenarios the way the model is asked to: prose, header, separator, rows
pub fn markdown_table(scenarios: &[TestScenario]) -> String {
    let mut text = String::from(
        "Here are the test scenarios:\n\n\
         | Scenario ID | Description | Test Data/Steps | Expected Result |\n\
         |---|---|---|---|\n",
    );
    for s in scenarios {
        text.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            s.id, s.description, s.input_data, s.expected
        ));
    }
    text.push_str("\nLet me know if you need more cases.");
    text
}
