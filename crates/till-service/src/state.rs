//! Application state.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::events::{LogEvents, PaymentEvents};
use crate::processor::ProcessorClient;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,

    /// Payment processor client (optional; absent when no secret key is
    /// configured, in which case payment routes return a configuration
    /// error).
    pub processor: Option<Arc<ProcessorClient>>,

    /// Webhook event handlers.
    pub events: Arc<dyn PaymentEvents>,
}

impl AppState {
    /// Create application state with the default logging event handlers.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_events(config, Arc::new(LogEvents))
    }

    /// Create application state with custom webhook event handlers.
    #[must_use]
    pub fn with_events(config: ServiceConfig, events: Arc<dyn PaymentEvents>) -> Self {
        // Create the processor client if configured
        let processor = config.processor_secret_key.as_ref().and_then(|key| {
            match ProcessorClient::new(&config.processor_api_url, key) {
                Ok(client) => {
                    tracing::info!(processor_url = %config.processor_api_url, "Payment processor enabled");
                    Some(Arc::new(client))
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create processor client");
                    None
                }
            }
        });

        if processor.is_none() {
            tracing::warn!("Payment processor not configured - payment routes will fail");
        }

        if config.webhook_secret.is_none() {
            tracing::warn!("Webhook secret not configured - webhooks will be rejected");
        }

        Self {
            config,
            processor,
            events,
        }
    }

    /// Check if the payment processor is configured.
    #[must_use]
    pub fn has_processor(&self) -> bool {
        self.processor.is_some()
    }

    /// The processor client, or a configuration error when absent.
    pub fn processor_client(&self) -> Result<&Arc<ProcessorClient>, ApiError> {
        self.processor
            .as_ref()
            .ok_or_else(|| ApiError::Configuration("Payment processor is not configured".into()))
    }
}
