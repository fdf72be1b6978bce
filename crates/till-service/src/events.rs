//! Webhook event dispatch.
//!
//! The processor notifies the gateway of payment lifecycle changes through
//! webhooks. After a webhook has been verified and acknowledged, its payload
//! is handed to a [`PaymentEvents`] implementation keyed by the event type
//! tag. The default wiring ([`LogEvents`]) only logs; deployments that need
//! side effects implement the trait and override the relevant methods.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ApiError;

/// A verified webhook notification from the payment processor.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    /// Event type tag, e.g. `payment_approved`.
    #[serde(rename = "type")]
    pub event_type: String,

    /// Processor-assigned event identifier.
    #[serde(default)]
    pub id: Option<String>,

    /// Event payload; shape varies by event type.
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Extension point for reacting to payment lifecycle events.
///
/// Every method defaults to a no-op so implementations only override the
/// events they care about. Handlers run after the webhook has been
/// acknowledged, so returned errors are logged and never surface to the
/// processor.
#[async_trait]
pub trait PaymentEvents: Send + Sync {
    /// A payment was approved.
    async fn payment_approved(&self, _event: &WebhookEvent) -> Result<(), ApiError> {
        Ok(())
    }

    /// An approved payment was captured.
    async fn payment_captured(&self, _event: &WebhookEvent) -> Result<(), ApiError> {
        Ok(())
    }

    /// A payment was declined.
    async fn payment_declined(&self, _event: &WebhookEvent) -> Result<(), ApiError> {
        Ok(())
    }

    /// A payment was refunded.
    async fn payment_refunded(&self, _event: &WebhookEvent) -> Result<(), ApiError> {
        Ok(())
    }

    /// Any event type without a dedicated method.
    async fn unknown_event(&self, _event_type: &str, _event: &WebhookEvent) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Dispatch a verified event to its handler by event type tag.
///
/// Failures are logged only; the acknowledgment has already been sent and
/// cannot be retracted.
pub async fn dispatch(handlers: &dyn PaymentEvents, event: &WebhookEvent) {
    let outcome = match event.event_type.as_str() {
        "payment_approved" => handlers.payment_approved(event).await,
        "payment_captured" => handlers.payment_captured(event).await,
        "payment_declined" => handlers.payment_declined(event).await,
        "payment_refunded" => handlers.payment_refunded(event).await,
        other => handlers.unknown_event(other, event).await,
    };

    if let Err(e) = outcome {
        tracing::error!(
            event_type = %event.event_type,
            error = %e,
            "Webhook event handler failed"
        );
    }
}

/// Default [`PaymentEvents`] implementation that logs every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEvents;

#[async_trait]
impl PaymentEvents for LogEvents {
    async fn payment_approved(&self, event: &WebhookEvent) -> Result<(), ApiError> {
        tracing::info!(payment_id = %payment_id(event), "Payment approved");
        Ok(())
    }

    async fn payment_captured(&self, event: &WebhookEvent) -> Result<(), ApiError> {
        tracing::info!(payment_id = %payment_id(event), "Payment captured");
        Ok(())
    }

    async fn payment_declined(&self, event: &WebhookEvent) -> Result<(), ApiError> {
        tracing::warn!(payment_id = %payment_id(event), "Payment declined");
        Ok(())
    }

    async fn payment_refunded(&self, event: &WebhookEvent) -> Result<(), ApiError> {
        tracing::info!(payment_id = %payment_id(event), "Payment refunded");
        Ok(())
    }

    async fn unknown_event(&self, event_type: &str, _event: &WebhookEvent) -> Result<(), ApiError> {
        tracing::debug!(event_type = %event_type, "Unhandled webhook event");
        Ok(())
    }
}

/// Payment identifier carried in the event data, if any.
fn payment_id(event: &WebhookEvent) -> &str {
    event
        .data
        .get("id")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct Recording {
        seen: Mutex<Vec<String>>,
    }

    impl Recording {
        fn new() -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, label: &str) {
            self.seen.lock().unwrap().push(label.to_string());
        }
    }

    #[async_trait]
    impl PaymentEvents for Recording {
        async fn payment_approved(&self, _event: &WebhookEvent) -> Result<(), ApiError> {
            self.record("approved");
            Ok(())
        }

        async fn payment_refunded(&self, _event: &WebhookEvent) -> Result<(), ApiError> {
            self.record("refunded");
            Ok(())
        }

        async fn unknown_event(
            &self,
            event_type: &str,
            _event: &WebhookEvent,
        ) -> Result<(), ApiError> {
            self.record(&format!("unknown:{event_type}"));
            Ok(())
        }
    }

    fn event(event_type: &str) -> WebhookEvent {
        WebhookEvent {
            event_type: event_type.to_string(),
            id: Some("evt_1".to_string()),
            data: serde_json::json!({ "id": "pay_1" }),
        }
    }

    #[tokio::test]
    async fn dispatch_routes_by_event_type() {
        let handlers = Recording::new();

        dispatch(&handlers, &event("payment_approved")).await;
        dispatch(&handlers, &event("payment_refunded")).await;

        let seen = handlers.seen.lock().unwrap();
        assert_eq!(*seen, vec!["approved", "refunded"]);
    }

    #[tokio::test]
    async fn dispatch_sends_unrecognized_types_to_unknown() {
        let handlers = Recording::new();

        dispatch(&handlers, &event("dispute_opened")).await;

        let seen = handlers.seen.lock().unwrap();
        assert_eq!(*seen, vec!["unknown:dispute_opened"]);
    }

    #[tokio::test]
    async fn dispatch_swallows_handler_errors() {
        struct Failing;

        #[async_trait]
        impl PaymentEvents for Failing {
            async fn payment_approved(&self, _event: &WebhookEvent) -> Result<(), ApiError> {
                Err(ApiError::Internal("downstream unavailable".into()))
            }
        }

        // Must not panic or propagate; the error is logged only.
        dispatch(&Failing, &event("payment_approved")).await;
    }

    #[test]
    fn webhook_event_parses_processor_payload() {
        let raw = serde_json::json!({
            "id": "evt_abc",
            "type": "payment_captured",
            "data": { "id": "pay_abc", "amount": 24300 }
        });

        let event: WebhookEvent = serde_json::from_value(raw).unwrap();
        assert_eq!(event.event_type, "payment_captured");
        assert_eq!(event.id.as_deref(), Some("evt_abc"));
        assert_eq!(event.data["amount"], 24300);
    }

    #[test]
    fn webhook_event_tolerates_missing_data() {
        let event: WebhookEvent =
            serde_json::from_str(r#"{"type":"payment_approved"}"#).unwrap();
        assert_eq!(event.event_type, "payment_approved");
        assert!(event.id.is_none());
        assert!(event.data.is_null());
    }
}
