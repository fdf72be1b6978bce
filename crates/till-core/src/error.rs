//! Error types for till pricing.

/// Result type for pricing operations.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Errors that can occur when computing order amounts.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    /// Quantity is zero, negative, or too large to price.
    #[error("invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected quantity.
        quantity: i64,
    },

    /// Discount fraction outside the half-open range `[0, 1)`.
    #[error("invalid discount fraction: {fraction}")]
    InvalidDiscount {
        /// The rejected fraction.
        fraction: f64,
    },

    /// Monetary amount is not a positive finite number, or is too large to
    /// express in minor units.
    #[error("invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected major-unit amount.
        amount: f64,
    },
}
