//! Refund handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use till_core::major_to_minor;

use crate::error::ApiError;
use crate::processor::{RefundRequest, UpstreamResponse};
use crate::state::AppState;

/// Request body for `POST /refund-payment`.
#[derive(Debug, Deserialize)]
pub struct RefundPaymentRequest {
    /// Processor payment identifier to refund against.
    #[serde(default, alias = "paymentId")]
    pub payment_id: Option<String>,
    /// Refund amount in major units (e.g. `12.34` dollars).
    #[serde(default)]
    pub amount: Option<f64>,
}

/// Forward a refund request to the processor.
///
/// The amount arrives in major units and is converted to minor units here.
/// Whether the refund exceeds the original charge is the processor's check,
/// not ours; its verdict is forwarded verbatim.
pub async fn refund_payment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RefundPaymentRequest>,
) -> Result<UpstreamResponse, ApiError> {
    let processor = state.processor_client()?;

    let payment_id = request
        .payment_id
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing payment id".into()))?;
    let amount = request
        .amount
        .ok_or_else(|| ApiError::BadRequest("Missing refund amount".into()))?;
    let amount_minor = major_to_minor(amount)?;

    let reference = format!("ref_{}", Uuid::new_v4());

    tracing::info!(
        payment_id = %payment_id,
        amount_minor = %amount_minor,
        reference = %reference,
        "Requesting refund"
    );

    let refund = RefundRequest {
        amount: amount_minor,
        reference,
    };

    Ok(processor.refund_payment(&payment_id, &refund).await?)
}
