//! HTTP transport
//!
//! The bridge talks to the backend through the [`HttpClient`] trait so that
//! actions can run against a mock transport in tests. [`ReqwestClient`] is the
//! production implementation.

use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;
use crate::config::ApiConfig;
use crate::utils::errors::{BridgeError, Result};
use crate::utils::helpers::join_url;

/// One request to the backend, path relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::GET, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::POST, path: path.into(), body: Some(body) }
    }

    pub fn put(path: impl Into<String>, body: Option<Value>) -> Self {
        Self { method: Method::PUT, path: path.into(), body }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::DELETE, path: path.into(), body: None }
    }
}

/// Raw backend answer; the body is decoded by the API client
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport capability used by the API client
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a request and return the status and body, whatever the status
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// reqwest-backed transport
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    client: Client,
    base_url: String,
}

impl ReqwestClient {
    /// Create a new client for the configured backend
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());

        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder.build().map_err(BridgeError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = join_url(&self.base_url, &request.path)?;

        debug!(method = %request.method, url = %url, "Sending backend request");

        let mut builder = self.client.request(request.method.clone(), url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                BridgeError::Timeout
            } else if e.is_connect() {
                BridgeError::Transport(e.to_string())
            } else {
                BridgeError::Http(e)
            }
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                BridgeError::Timeout
            } else {
                BridgeError::Http(e)
            }
        })?;

        Ok(ApiResponse { status, body })
    }
}
