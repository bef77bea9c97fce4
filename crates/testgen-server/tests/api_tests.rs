use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use mockall::mock;
use pretty_assertions::assert_eq;
use serde_json::json;

use testgen_core::{GenerationRequest, GenerationResponse};
use testgen_server::{
    api::build_router, GenerationClient, ServerConfig, ServerError, ServerResult, TestGenServer,
};
use testgen_test_utils::gemini::candidate_body;
use testgen_test_utils::TestClient;

const ENDPOINT: &str = "/generate-test-cases";

// Mock the generation client
mock! {
    #[derive(Debug)]
    pub GenerationClient {}

    #[async_trait]
    impl GenerationClient for GenerationClient {
        async fn generate(&self, request: &GenerationRequest) -> ServerResult<GenerationResponse>;
    }
}

fn test_client(client: MockGenerationClient) -> TestClient {
    let config = ServerConfig::new("test-api-key");
    let server = TestGenServer::new(config, Arc::new(client));
    TestClient::from_router(build_router(Arc::new(server)))
}

fn answering(text: &'static str) -> MockGenerationClient {
    let mut client = MockGenerationClient::new();
    client.expect_generate().times(1).returning(move |_| {
        Ok(serde_json::from_value(candidate_body(text)).expect("valid candidate body"))
    });
    client
}

#[tokio::test]
async fn non_json_body_is_rejected_without_calling_upstream() {
    let mut client = MockGenerationClient::new();
    client.expect_generate().never();
    let app = test_client(client);

    let response = app
        .post_raw(ENDPOINT, Some("application/json"), "this is not json")
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json().unwrap();
    assert_eq!(body["error"], "Invalid request body");
    assert_eq!(body["errorDetails"]["errorCode"], "ERR_INVALID_REQUEST");
}

#[tokio::test]
async fn empty_body_is_rejected() {
    let mut client = MockGenerationClient::new();
    client.expect_generate().never();
    let app = test_client(client);

    let response = app.post_raw(ENDPOINT, None, "").await.unwrap();
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn transport_failure_returns_500_with_reason() {
    let mut client = MockGenerationClient::new();
    client
        .expect_generate()
        .times(1)
        .returning(|_| Err(ServerError::NetworkError("connection refused".to_string())));
    let app = test_client(client);

    let response = app
        .post_json(ENDPOINT, &json!({ "featureName": "Login", "description": "Sign in" }))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json().unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Error calling Gemini API"), "{message}");
    assert!(message.contains("connection refused"), "{message}");
}

#[tokio::test]
async fn decode_failure_returns_500() {
    let mut client = MockGenerationClient::new();
    client
        .expect_generate()
        .returning(|_| Err(ServerError::DecodeError("expected value at line 1".to_string())));
    let app = test_client(client);

    let response = app
        .post_json(ENDPOINT, &json!({ "featureName": "Login", "description": "Sign in" }))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("expected value at line 1"));
}

#[tokio::test]
async fn scenarios_are_extracted_in_order() {
    let app = test_client(answering(
        "Sure, here you go.\n\
         | Scenario ID | Description | Test Data/Steps | Expected Result |\n\
         |-------------|-------------|-----------------|-----------------|\n\
         | SC-LOGIN-01 | Valid login | user/pass | Success |\n\
         | SC-LOGIN-02 | Locked account | locked/pass | Account locked message |\n",
    ));

    let response = app
        .post_json(ENDPOINT, &json!({ "featureName": "Login", "description": "Sign in" }))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("application/json"));
    assert_eq!(
        response.json().unwrap(),
        json!({
            "scenarios": [
                {
                    "id": "SC-LOGIN-01",
                    "description": "Valid login",
                    "inputData": "user/pass",
                    "expected": "Success"
                },
                {
                    "id": "SC-LOGIN-02",
                    "description": "Locked account",
                    "inputData": "locked/pass",
                    "expected": "Account locked message"
                }
            ]
        })
    );
}

#[tokio::test]
async fn answer_without_table_is_an_empty_list() {
    let app = test_client(answering("I cannot produce a table for that feature."));

    let response = app
        .post_json(ENDPOINT, &json!({ "featureName": "X", "description": "Y" }))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json().unwrap(), json!({ "scenarios": [] }));
}

#[tokio::test]
async fn response_without_candidates_is_an_empty_list() {
    let mut client = MockGenerationClient::new();
    client
        .expect_generate()
        .returning(|_| Ok(GenerationResponse::default()));
    let app = test_client(client);

    let response = app
        .post_json(ENDPOINT, &json!({ "featureName": "X", "description": "Y" }))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json().unwrap(), json!({ "scenarios": [] }));
}

#[tokio::test]
async fn prompt_carries_feature_details() {
    let mut client = MockGenerationClient::new();
    client
        .expect_generate()
        .withf(|request: &GenerationRequest| {
            let prompt = &request.contents[0].parts[0].text;
            prompt.contains("Feature: Checkout") && prompt.contains("Description: Pay by card")
        })
        .times(1)
        .returning(|_| Ok(GenerationResponse::default()));
    let app = test_client(client);

    let response = app
        .post_json(
            ENDPOINT,
            &json!({ "featureName": "Checkout", "description": "Pay by card" }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn missing_fields_and_plain_content_type_are_accepted() {
    let app = test_client(answering("| SC-1 | d | i | e |"));

    let response = app
        .post_raw(ENDPOINT, Some("text/plain"), r#"{"featureName": "Search"}"#)
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json().unwrap()["scenarios"][0]["id"], "SC-1");
}

#[tokio::test]
async fn null_body_is_treated_as_empty_feature() {
    let mut client = MockGenerationClient::new();
    client
        .expect_generate()
        .withf(|request: &GenerationRequest| {
            let prompt = &request.contents[0].parts[0].text;
            prompt.contains("Feature: \n") && prompt.contains("Description: \n")
        })
        .times(1)
        .returning(|_| Ok(GenerationResponse::default()));
    let app = test_client(client);

    let response = app
        .post_raw(ENDPOINT, Some("application/json"), "null")
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json().unwrap(), json!({ "scenarios": [] }));
}

#[tokio::test]
async fn health_reports_up() {
    let app = test_client(MockGenerationClient::new());

    let response = app.get("/health").await.unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json().unwrap()["status"], "UP");
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let app = test_client(MockGenerationClient::new());

    let response = app
        .preflight(ENDPOINT, "http://frontend.example.com")
        .await
        .unwrap();

    assert!(response.status.is_success());
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    assert_eq!(response.header("access-control-max-age"), Some("300"));
    let methods = response
        .header("access-control-allow-methods")
        .unwrap()
        .to_ascii_uppercase();
    assert!(methods.contains("POST"), "{methods}");
}

#[tokio::test]
async fn cors_headers_are_set_on_regular_responses() {
    let app = test_client(answering("no table"));

    let request = axum::http::Request::builder()
        .method("POST")
        .uri(ENDPOINT)
        .header("origin", "http://frontend.example.com")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(r#"{"featureName":"A","description":"B"}"#))
        .unwrap();
    let response = app.send(request).await.unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    assert_eq!(response.header("access-control-expose-headers"), Some("link"));
}
