//! Payment session handlers.
//!
//! Both handlers recompute the charge amount server side from quantity and
//! the discount table; totals supplied by the client are never trusted. The
//! processor's response is forwarded to the storefront verbatim.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use till_core::{Quote, DEFAULT_CURRENCY};

use crate::error::ApiError;
use crate::processor::{
    Billing, BillingAddress, Customer, PaymentSessionRequest, SessionSubmitRequest,
    UpstreamResponse,
};
use crate::state::AppState;

/// Request body for `POST /create-payment-sessions`.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// Number of units ordered.
    #[serde(default)]
    pub quantity: Option<i64>,
    /// ISO 4217 currency code; defaults to the storefront currency.
    #[serde(default)]
    pub currency: Option<String>,
}

/// Request body for `POST /submit-payment`.
#[derive(Debug, Deserialize)]
pub struct SubmitPaymentRequest {
    /// Opaque payment-method data collected by the processor's browser
    /// component.
    #[serde(default)]
    pub session_data: Option<String>,
    /// Identifier of the session being submitted.
    #[serde(default)]
    pub payment_session_id: Option<String>,
    /// Number of units ordered.
    #[serde(default)]
    pub quantity: Option<i64>,
    /// Discount code; unmatched codes are ignored at this stage.
    #[serde(default, alias = "discountCode")]
    pub discount_code: Option<String>,
}

/// Create a hosted payment session with the processor.
///
/// The session amount is computed from quantity alone; any discount is
/// applied later at submission, where the final amount is authoritative.
pub async fn create_payment_session(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<UpstreamResponse, ApiError> {
    let processor = state.processor_client()?;

    let quantity = request
        .quantity
        .ok_or_else(|| ApiError::BadRequest("Missing quantity".into()))?;
    let quote = Quote::new(quantity, 0.0)?;

    let currency = request
        .currency
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
    let reference = format!("ord_{}", Uuid::new_v4());

    let session = PaymentSessionRequest {
        amount: quote.total_minor,
        currency,
        reference: reference.clone(),
        billing: Billing {
            address: BillingAddress {
                country: state.config.billing_country.clone(),
            },
        },
        customer: Customer {
            name: state.config.customer_name.clone(),
            email: state.config.customer_email.clone(),
        },
        success_url: state.config.success_url.clone(),
        failure_url: state.config.failure_url.clone(),
        processing_channel_id: state.config.processor_channel_id.clone(),
    };

    tracing::info!(
        reference = %reference,
        amount = %quote.total_minor,
        currency = %session.currency,
        "Creating payment session"
    );

    Ok(processor.create_payment_session(&session).await?)
}

/// Submit collected payment data for a session with the authoritative amount.
///
/// This is the load-bearing recomputation: the charged amount is derived
/// from quantity and the configured discount table, so tampering with
/// client-side totals has no effect.
pub async fn submit_payment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubmitPaymentRequest>,
) -> Result<UpstreamResponse, ApiError> {
    let processor = state.processor_client()?;

    let session_data = request
        .session_data
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing session data".into()))?;
    let session_id = request
        .payment_session_id
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing payment session id".into()))?;
    let quantity = request
        .quantity
        .ok_or_else(|| ApiError::BadRequest("Missing quantity".into()))?;

    // Unknown codes mean no discount here; only /apply-discount reports them.
    let percent_off = request
        .discount_code
        .as_deref()
        .and_then(|code| state.config.discounts.lookup(code))
        .map_or(0.0, |discount| discount.percent_off);

    let quote = Quote::new(quantity, percent_off)?;

    tracing::info!(
        session_id = %session_id,
        amount = %quote.total_minor,
        percent_off = %quote.percent_off,
        "Submitting payment session"
    );

    let submit = SessionSubmitRequest {
        session_data,
        amount: quote.total_minor,
    };

    Ok(processor.submit_payment_session(&session_id, &submit).await?)
}
