//! Mock backend server for testing
//!
//! This module provides a mock HTTP server that simulates the user, event and
//! announcement REST API. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

/// Mock backend API server for testing
pub struct BackendMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub status: u16,
    pub delay_ms: Option<u64>,
    pub custom_response: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            status: 200,
            delay_ms: None,
            custom_response: None,
        }
    }
}

impl MockResponseConfig {
    pub fn status(status: u16) -> Self {
        Self { status, ..Self::default() }
    }

    pub fn delayed(delay_ms: u64) -> Self {
        Self { delay_ms: Some(delay_ms), ..Self::default() }
    }

    fn template(&self, default_body: Value) -> ResponseTemplate {
        let body = self.custom_response.clone().unwrap_or(default_body);
        let mut response = ResponseTemplate::new(self.status).set_body_json(body);

        if let Some(delay) = self.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        response
    }
}

impl BackendMockServer {
    /// Create a new mock backend server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Answer `verb path` with `{message}`
    pub async fn mock_message(&self, verb: &str, endpoint: &str, message: &str, config: MockResponseConfig) {
        Mock::given(method(verb))
            .and(path(endpoint))
            .respond_with(config.template(json!({ "message": message })))
            .mount(&self.server)
            .await;
    }

    /// Answer `GET endpoint` with `{key: records}`
    pub async fn mock_list(&self, endpoint: &str, key: &str, records: Value, config: MockResponseConfig) {
        let mut body = serde_json::Map::new();
        body.insert(key.to_string(), records);

        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(config.template(Value::Object(body)))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_users(&self, users: Value) {
        self.mock_list("/users/getall", "users", users, MockResponseConfig::default()).await;
    }

    pub async fn mock_events(&self, events: Value) {
        self.mock_list("/events/getall", "events", events, MockResponseConfig::default()).await;
    }

    pub async fn mock_announcements(&self, announcements: Value) {
        self.mock_list("/announcements/getall", "announcements", announcements, MockResponseConfig::default()).await;
    }

    /// Answer `POST /users/login` the way the backend does
    pub async fn mock_login(&self, config: MockResponseConfig) {
        let body = if config.status == 200 {
            json!({ "message": "Login successful!", "user": super::test_data::ada() })
        } else {
            json!({ "message": "Invalid email or password." })
        };

        Mock::given(method("POST"))
            .and(path("/users/login"))
            .respond_with(config.template(body))
            .mount(&self.server)
            .await;
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }

    /// Every request the server received, oldest first
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Requests received for an exact path
    pub async fn requests_to(&self, endpoint: &str) -> Vec<Request> {
        self.requests()
            .await
            .into_iter()
            .filter(|req| req.url.path() == endpoint)
            .collect()
    }

    /// Verify that a specific endpoint was called
    pub async fn verify_endpoint_called(&self, endpoint: &str, times: usize) {
        let matching_requests = self.requests_to(endpoint).await.len();

        assert_eq!(
            matching_requests, times,
            "Expected {} calls to {}, but got {}",
            times, endpoint, matching_requests
        );
    }
}

/// JSON body of a received request
pub fn body_of(request: &Request) -> Value {
    serde_json::from_slice(&request.body).expect("request body is JSON")
}
