//! Test context for unified test setup
//!
//! This module provides a test context that wires a bridge to a mock backend
//! and an in-memory document.

use std::sync::Arc;
use FormBridge::{Bridge, MemoryDocument, ReqwestClient, Settings};

use super::backend_mock::BackendMockServer;

/// Unified test context that manages all test components
pub struct TestContext {
    pub backend: BackendMockServer,
    pub document: Arc<MemoryDocument>,
    pub settings: Settings,
    pub bridge: Bridge,
}

/// Test context configuration
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub in_flight_guard: bool,
    pub timeout_seconds: Option<u64>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            in_flight_guard: true,
            timeout_seconds: None,
        }
    }
}

impl TestContext {
    /// Create a new test context with a blank admin page
    pub async fn new() -> Self {
        Self::with_document(MemoryDocument::standard()).await
    }

    /// Create a new test context over the given page
    pub async fn with_document(document: MemoryDocument) -> Self {
        Self::new_with_config(document, TestConfig::default()).await
    }

    /// Create a new test context with custom configuration
    pub async fn new_with_config(document: MemoryDocument, config: TestConfig) -> Self {
        super::init_test_env();

        let backend = BackendMockServer::new().await;

        let mut settings = Settings::default();
        settings.api.base_url = backend.base_url();
        settings.api.timeout_seconds = config.timeout_seconds;
        settings.features.in_flight_guard = config.in_flight_guard;

        let http = Arc::new(ReqwestClient::new(&settings.api).expect("Failed to build HTTP client"));
        let document = Arc::new(document);
        let bridge = Bridge::from_settings(&settings, http, document.clone());

        Self {
            backend,
            document,
            settings,
            bridge,
        }
    }
}
