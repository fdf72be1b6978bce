//! Webhook handler for processor notifications.
//!
//! Verification order is fixed: configured secret, then signature header,
//! then HMAC over the exact raw body bytes. A request that passes all three
//! is acknowledged immediately; event processing runs on a detached task so
//! it can never alter the committed response.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;

use crate::crypto::{constant_time_eq, hmac_sha256_hex};
use crate::error::ApiError;
use crate::events::{dispatch, WebhookEvent};
use crate::state::AppState;

/// Signature header set by the payment processor.
const SIGNATURE_HEADER: &str = "cko-signature";

/// Handle processor webhooks.
///
/// The HMAC is computed over the body bytes exactly as received; parsing and
/// re-serializing the JSON first would change the bytes and break
/// verification.
pub async fn receive_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let secret = state
        .config
        .webhook_secret
        .as_deref()
        .ok_or_else(|| ApiError::Configuration("Webhook secret is not configured".into()))?;

    // No signature supplied: reject without doing any HMAC work.
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::MissingSignature)?;

    let expected = hmac_sha256_hex(secret, &body);
    if !constant_time_eq(&expected, signature) {
        tracing::warn!("Webhook signature mismatch");
        return Err(ApiError::InvalidSignature);
    }

    // Acknowledge now; everything past this point is best-effort.
    let events = Arc::clone(&state.events);
    tokio::spawn(async move {
        match serde_json::from_slice::<WebhookEvent>(&body) {
            Ok(event) => {
                tracing::info!(
                    event_type = %event.event_type,
                    event_id = ?event.id,
                    "Processing webhook event"
                );
                dispatch(events.as_ref(), &event).await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Webhook body verified but not parseable as JSON");
            }
        }
    });

    Ok("ok")
}
