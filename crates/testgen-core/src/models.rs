//! Data model for the testgen service
//!
//! The inbound/outbound JSON shapes of the HTTP API, plus the
//! "contents -> parts -> text" model used by the Gemini `generateContent` API.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Feature details supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRequest {
    /// Name of the feature under test
    #[serde(default, deserialize_with = "null_as_default")]
    pub feature_name: String,

    /// Free-form description of the feature
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl FeatureRequest {
    pub fn new(feature_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            feature_name: feature_name.into(),
            description: description.into(),
        }
    }
}

/// A single piece of text content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Non-text parts (function calls, inline data) carry no text
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

/// An ordered group of parts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, deserialize_with = "null_as_default")]
    pub parts: Vec<Part>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Request body for `generateContent`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub contents: Vec<Content>,
}

impl GenerationRequest {
    /// Build a single-turn request carrying one text prompt
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt.into() }],
                role: None,
            }],
        }
    }
}

/// One generated answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Content,

    /// Why the model stopped generating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Error envelope returned by the Gemini API on failure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiApiError {
    #[serde(default)]
    pub code: u16,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub status: String,
}

/// Response body of `generateContent`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidates: Vec<Candidate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<GeminiApiError>,
}

impl GenerationResponse {
    /// Text of the first candidate, or `None` when there is no candidate or
    /// the candidate has no parts. Multiple parts are concatenated.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        if candidate.content.parts.is_empty() {
            return None;
        }

        Some(
            candidate
                .content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect(),
        )
    }
}

/// One parsed row of a generated test-case table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScenario {
    pub id: String,
    pub description: String,
    pub input_data: String,
    pub expected: String,
}

/// Response body of `POST /generate-test-cases`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestScenarioResponse {
    pub scenarios: Vec<TestScenario>,
}

impl From<Vec<TestScenario>> for TestScenarioResponse {
    fn from(scenarios: Vec<TestScenario>) -> Self {
        Self { scenarios }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn feature_request_uses_camel_case_and_defaults_missing_fields() {
        let request: FeatureRequest =
            serde_json::from_value(json!({ "featureName": "Login" })).unwrap();
        assert_eq!(request, FeatureRequest::new("Login", ""));
    }

    #[test]
    fn generation_request_serializes_contents_parts_text() {
        let request = GenerationRequest::from_prompt("hello");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "contents": [ { "parts": [ { "text": "hello" } ] } ] })
        );
    }

    #[test]
    fn response_text_reads_first_candidate() {
        let response: GenerationResponse = serde_json::from_value(json!({
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [ { "text": "first " }, { "text": "half" } ]
                    },
                    "finishReason": "STOP"
                },
                { "content": { "parts": [ { "text": "ignored" } ] } }
            ]
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some("first half"));
        assert_eq!(response.candidates[0].finish_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn response_text_is_none_without_candidates_or_parts() {
        assert_eq!(GenerationResponse::default().text(), None);

        let response: GenerationResponse = serde_json::from_value(json!({
            "candidates": [ { "content": { "parts": [] } } ]
        }))
        .unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn null_fields_decode_as_empty() {
        let request: FeatureRequest =
            serde_json::from_value(json!({ "featureName": null, "description": "d" })).unwrap();
        assert_eq!(request, FeatureRequest::new("", "d"));

        let response: GenerationResponse =
            serde_json::from_value(json!({ "candidates": null })).unwrap();
        assert!(response.candidates.is_empty());
        assert_eq!(response.text(), None);

        let response: GenerationResponse = serde_json::from_value(json!({
            "candidates": [ { "content": { "parts": null } } ]
        }))
        .unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn response_decodes_api_error_envelope() {
        let response: GenerationResponse = serde_json::from_value(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        }))
        .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, 400);
        assert_eq!(error.status, "INVALID_ARGUMENT");
        assert!(response.candidates.is_empty());
    }

    #[test]
    fn scenario_serializes_input_data_in_camel_case() {
        let scenario = TestScenario {
            id: "SC-LOGIN-01".to_string(),
            description: "Valid login".to_string(),
            input_data: "user/pass".to_string(),
            expected: "Success".to_string(),
        };

        assert_eq!(
            serde_json::to_value(TestScenarioResponse::from(vec![scenario])).unwrap(),
            json!({
                "scenarios": [
                    {
                        "id": "SC-LOGIN-01",
                        "description": "Valid login",
                        "inputData": "user/pass",
                        "expected": "Success"
                    }
                ]
            })
        );
    }
}
