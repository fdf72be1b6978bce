//! Discount validation handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /apply-discount`.
#[derive(Debug, Deserialize)]
pub struct ApplyDiscountRequest {
    /// Discount code to validate.
    #[serde(default)]
    pub code: Option<String>,
}

/// Response body for a recognized discount code.
#[derive(Debug, Serialize)]
pub struct ApplyDiscountResponse {
    /// Always `true` on success.
    pub success: bool,
    /// The normalized (uppercase) code.
    pub code: String,
    /// Fraction off the order total, in `[0, 1)`.
    pub percentage: f64,
}

/// Validate a discount code against the configured table.
///
/// A missing or empty code is a validation error; a well-formed code that is
/// not in the table is a distinct not-found error so the storefront can tell
/// the two apart.
pub async fn apply_discount(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ApplyDiscountRequest>,
) -> Result<Json<ApplyDiscountResponse>, ApiError> {
    let code = request.code.as_deref().map(str::trim).unwrap_or_default();
    if code.is_empty() {
        return Err(ApiError::BadRequest("Missing discount code".into()));
    }

    let discount = state
        .config
        .discounts
        .lookup(code)
        .ok_or_else(|| ApiError::UnknownDiscount(code.to_ascii_uppercase()))?;

    tracing::info!(
        code = %discount.code,
        percent_off = %discount.percent_off,
        "Discount code validated"
    );

    Ok(Json(ApplyDiscountResponse {
        success: true,
        code: discount.code,
        percentage: discount.percent_off,
    }))
}
