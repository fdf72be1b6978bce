//! Common test utilities for till integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use axum::Router;
use axum_test::TestServer;
use wiremock::MockServer;

use till_core::DiscountTable;
use till_service::{create_router, AppState, ServiceConfig};

/// Webhook shared secret used across the suites.
pub const WEBHOOK_SECRET: &str = "whsec_test_secret";

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Mock payment processor the service under test talks to.
    pub processor: MockServer,
}

impl TestHarness {
    /// Create a new test harness backed by a fresh mock processor.
    pub async fn new() -> Self {
        let processor = MockServer::start().await;
        let config = test_config(&processor.uri());
        Self::with_config(config, processor)
    }

    /// Create a harness from explicit configuration.
    pub fn with_config(config: ServiceConfig, processor: MockServer) -> Self {
        Self::from_state(AppState::new(config), processor)
    }

    /// Create a harness from prebuilt state (for custom event handlers).
    pub fn from_state(state: AppState, processor: MockServer) -> Self {
        let router: Router = create_router(state);
        let server = TestServer::new(router).expect("Failed to create test server");
        Self { server, processor }
    }
}

/// Baseline configuration pointing the processor client at the mock server.
pub fn test_config(processor_url: &str) -> ServiceConfig {
    ServiceConfig {
        listen_addr: "127.0.0.1:0".into(),
        processor_api_url: processor_url.to_string(),
        processor_secret_key: Some("sk_test_key".into()),
        processor_channel_id: Some("pc_test_channel".into()),
        webhook_secret: Some(WEBHOOK_SECRET.into()),
        billing_country: "HK".into(),
        customer_name: "Test Customer".into(),
        customer_email: "test@example.com".into(),
        success_url: "http://localhost:3000/success".into(),
        failure_url: "http://localhost:3000/failure".into(),
        cors_origins: vec!["*".into()],
        max_body_bytes: 1024 * 1024,
        request_timeout_seconds: 30,
        discounts: DiscountTable::default(),
    }
}
