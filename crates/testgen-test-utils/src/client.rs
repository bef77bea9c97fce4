use axum::{
    body::{self, Body, Bytes},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::error::TestError;

/// Test client that drives a router in-process, without binding a port
#[derive(Clone)]
pub struct TestClient {
    app: Router,
}

/// Fully buffered response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Body decoded as JSON
    pub fn json(&self) -> Result<Value, TestError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Body as lossy UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Header value as a string, if present and valid
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl TestClient {
    /// Create a new test client from a Router
    pub fn from_router(app: Router) -> Self {
        Self { app }
    }

    /// Send a prepared request to the router and buffer the response
    pub async fn send(&self, request: Request<Body>) -> Result<TestResponse, TestError> {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| TestError::Request(format!("Failed to execute request: {}", e)))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| TestError::Body(e.to_string()))?;

        Ok(TestResponse {
            status,
            headers,
            body,
        })
    }

    /// POST a JSON value
    pub async fn post_json(&self, path: &str, body: &Value) -> Result<TestResponse, TestError> {
        let json_body = serde_json::to_string(body)?;
        self.post_raw(path, Some("application/json"), json_body).await
    }

    /// POST an arbitrary body, optionally with a content type
    pub async fn post_raw(
        &self,
        path: &str,
        content_type: Option<&str>,
        body: impl Into<Body>,
    ) -> Result<TestResponse, TestError> {
        let mut builder = Request::builder().method(Method::POST).uri(path);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }

        let request = builder
            .body(body.into())
            .map_err(|e| TestError::Request(format!("Failed to build request: {}", e)))?;
        self.send(request).await
    }

    /// GET a path
    pub async fn get(&self, path: &str) -> Result<TestResponse, TestError> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .map_err(|e| TestError::Request(format!("Failed to build request: {}", e)))?;
        self.send(request).await
    }

    /// CORS preflight for a POST from `origin`
    pub async fn preflight(&self, path: &str, origin: &str) -> Result<TestResponse, TestError> {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(path)
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .map_err(|e| TestError::Request(format!("Failed to build request: {}", e)))?;
        self.send(request).await
    }
}
