//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::processor::ProcessorError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request - invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Discount code not present in the configured table.
    ///
    /// Distinct from `BadRequest`: the storefront shows "missing code" and
    /// "unknown code" differently, and this maps to 404 with the
    /// `{success, message}` body shape the storefront expects.
    #[error("unknown discount code: {0}")]
    UnknownDiscount(String),

    /// Webhook request carried no signature header.
    #[error("missing webhook signature")]
    MissingSignature,

    /// Webhook signature did not match the request body.
    #[error("invalid webhook signature")]
    InvalidSignature,

    /// A required secret or processor credential is not configured.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The payment processor could not be reached.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Body shape for the discount endpoint's not-found response.
#[derive(Debug, Serialize)]
struct DiscountNotFound {
    success: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            Self::UnknownDiscount(_) => {
                // The storefront consumes this shape directly.
                let body = DiscountNotFound {
                    success: false,
                    message: self.to_string(),
                };
                return (StatusCode::NOT_FOUND, Json(body)).into_response();
            }
            Self::MissingSignature => (
                StatusCode::UNAUTHORIZED,
                "missing_signature",
                self.to_string(),
            ),
            Self::InvalidSignature => (
                StatusCode::UNAUTHORIZED,
                "invalid_signature",
                self.to_string(),
            ),
            Self::Configuration(msg) => {
                tracing::error!(error = %msg, "Configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "configuration_error",
                    "Service is not configured for this operation".to_string(),
                )
            }
            Self::Upstream(msg) => {
                tracing::error!(error = %msg, "Payment processor request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream_error",
                    "Payment processor request failed".to_string(),
                )
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<till_core::PricingError> for ApiError {
    fn from(err: till_core::PricingError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<ProcessorError> for ApiError {
    fn from(err: ProcessorError) -> Self {
        match err {
            ProcessorError::Http(e) => Self::Upstream(e.to_string()),
        }
    }
}
