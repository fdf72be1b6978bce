//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{discounts, health, payments, refunds, webhooks};
use crate::state::AppState;

/// Maximum concurrent requests for the payment endpoints.
///
/// Each of them holds an open connection to the processor, so the group is
/// protected from overload.
const PAYMENT_MAX_CONCURRENT_REQUESTS: usize = 50;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
///
/// ## Storefront (concurrency limited)
/// - `POST /apply-discount` - Validate a discount code
/// - `POST /create-payment-sessions` - Create a hosted payment session
/// - `POST /submit-payment` - Submit payment data with the recomputed amount
/// - `POST /refund-payment` - Forward a refund request
///
/// ## Webhooks (signature verification)
/// - `POST /webhooks` - Payment processor notifications
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    // Build CORS layer
    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    // Create concurrency-limited payment routes
    let payment_routes = Router::new()
        .route("/apply-discount", post(discounts::apply_discount))
        .route(
            "/create-payment-sessions",
            post(payments::create_payment_session),
        )
        .route("/submit-payment", post(payments::submit_payment))
        .route("/refund-payment", post(refunds::refund_payment))
        .layer(ConcurrencyLimitLayer::new(PAYMENT_MAX_CONCURRENT_REQUESTS));

    Router::new()
        // Health (public, no rate limit)
        .route("/health", get(health::health))
        // Storefront routes (rate limited)
        .merge(payment_routes)
        // Webhooks (no rate limit - delivery is controlled by the processor)
        .route("/webhooks", post(webhooks::receive_webhook))
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
