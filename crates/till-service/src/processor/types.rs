//! Wire types for the payment processor API.

use axum::body::Bytes;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Payment session creation payload.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentSessionRequest {
    /// Charge amount in minor units.
    pub amount: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Merchant order reference.
    pub reference: String,
    /// Billing details.
    pub billing: Billing,
    /// Customer details.
    pub customer: Customer,
    /// Redirect URL for completed payments.
    pub success_url: String,
    /// Redirect URL for failed payments.
    pub failure_url: String,
    /// Processing channel the payment is routed through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_channel_id: Option<String>,
}

/// Billing details for a payment session.
#[derive(Debug, Clone, Serialize)]
pub struct Billing {
    /// Billing address.
    pub address: BillingAddress,
}

/// Billing address; only the country is required by the processor.
#[derive(Debug, Clone, Serialize)]
pub struct BillingAddress {
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

/// Customer details for a payment session.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    /// Customer display name.
    pub name: String,
    /// Customer email address.
    pub email: String,
}

/// Session submission payload.
///
/// `session_data` is the opaque payment-method token collected by the
/// processor's browser component; the gateway never inspects it.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSubmitRequest {
    /// Opaque payment-method data from the browser component.
    pub session_data: String,
    /// Authoritative charge amount in minor units, recomputed server side.
    pub amount: i64,
}

/// Refund request payload.
#[derive(Debug, Clone, Serialize)]
pub struct RefundRequest {
    /// Refund amount in minor units.
    pub amount: i64,
    /// Freshly generated refund reference.
    pub reference: String,
}

/// Raw response captured from the payment processor.
///
/// The processor's status and body are re-emitted to the caller unchanged;
/// the gateway never re-derives the processor's response schema.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    /// HTTP status returned by the processor.
    pub status: StatusCode,
    /// Content type of the processor's body, when present.
    pub content_type: Option<HeaderValue>,
    /// Raw response body.
    pub body: Bytes,
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        if let Some(content_type) = self.content_type {
            response.headers_mut().insert(header::CONTENT_TYPE, content_type);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_request_serializes_processor_shape() {
        let request = PaymentSessionRequest {
            amount: 9000,
            currency: "HKD".to_string(),
            reference: "ord_test".to_string(),
            billing: Billing {
                address: BillingAddress {
                    country: "HK".to_string(),
                },
            },
            customer: Customer {
                name: "Test Customer".to_string(),
                email: "test@example.com".to_string(),
            },
            success_url: "http://localhost:3000/success".to_string(),
            failure_url: "http://localhost:3000/failure".to_string(),
            processing_channel_id: Some("pc_123".to_string()),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["amount"], 9000);
        assert_eq!(value["currency"], "HKD");
        assert_eq!(value["billing"]["address"]["country"], "HK");
        assert_eq!(value["processing_channel_id"], "pc_123");
    }

    #[test]
    fn session_request_omits_unset_channel() {
        let request = PaymentSessionRequest {
            amount: 9000,
            currency: "HKD".to_string(),
            reference: "ord_test".to_string(),
            billing: Billing {
                address: BillingAddress {
                    country: "HK".to_string(),
                },
            },
            customer: Customer {
                name: "Test Customer".to_string(),
                email: "test@example.com".to_string(),
            },
            success_url: "http://localhost:3000/success".to_string(),
            failure_url: "http://localhost:3000/failure".to_string(),
            processing_channel_id: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("processing_channel_id").is_none());
    }
}
