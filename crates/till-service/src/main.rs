//! Till Service - HTTP gateway between the storefront and the payment processor.
//!
//! This is the main entry point for the till service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use till_service::{create_router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,till=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Till Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    // Build app state
    let state = AppState::new(config.clone());

    tracing::info!(
        listen_addr = %config.listen_addr,
        processor_url = %config.processor_api_url,
        processor_configured = %state.has_processor(),
        webhook_secret_configured = %config.webhook_secret.is_some(),
        discount_codes = %config.discounts.len(),
        "Service configuration loaded"
    );

    // Create the router
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
