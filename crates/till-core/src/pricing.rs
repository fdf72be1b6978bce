//! Order amount computation for the till gateway.
//!
//! The storefront sells a single product, so every amount derives from the
//! unit price, a quantity, and an optional discount fraction. Amounts are
//! computed server side on every request; client-supplied totals are never
//! trusted.

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};

/// Price of one unit in minor units (HK$90.00).
pub const UNIT_PRICE_MINOR: i64 = 9000;

/// Currency used when the storefront does not specify one.
pub const DEFAULT_CURRENCY: &str = "HKD";

/// Compute the order total in minor units.
///
/// `percent_off` is a fraction in `[0, 1)`; `0.0` means no discount. The
/// discounted product is rounded half-up to the nearest minor unit.
///
/// # Errors
///
/// Returns [`PricingError::InvalidQuantity`] unless `quantity >= 1`, and
/// [`PricingError::InvalidDiscount`] if the fraction is outside `[0, 1)`.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn order_total_minor(quantity: i64, percent_off: f64) -> Result<i64> {
    if quantity < 1 {
        return Err(PricingError::InvalidQuantity { quantity });
    }
    if !(0.0..1.0).contains(&percent_off) {
        return Err(PricingError::InvalidDiscount {
            fraction: percent_off,
        });
    }

    let gross = UNIT_PRICE_MINOR
        .checked_mul(quantity)
        .ok_or(PricingError::InvalidQuantity { quantity })?;

    if percent_off == 0.0 {
        return Ok(gross);
    }

    Ok((gross as f64 * (1.0 - percent_off)).round() as i64)
}

/// Convert a major-unit amount (e.g. `12.34` dollars) to minor units.
///
/// Rounds half-up to the nearest minor unit, so `12.34` becomes `1234`.
///
/// # Errors
///
/// Returns [`PricingError::InvalidAmount`] unless the amount is a positive
/// finite number whose minor-unit value fits in an `i64`.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn major_to_minor(amount: f64) -> Result<i64> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(PricingError::InvalidAmount { amount });
    }

    let minor = (amount * 100.0).round();
    // At or above 2^63 the i64 cast saturates instead of rounding.
    if minor >= i64::MAX as f64 {
        return Err(PricingError::InvalidAmount { amount });
    }
    Ok(minor as i64)
}

/// An authoritative pricing quote for one order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Price of one unit in minor units.
    pub unit_price_minor: i64,
    /// Number of units ordered.
    pub quantity: i64,
    /// Discount fraction applied, `0.0` when none.
    pub percent_off: f64,
    /// Total charge in minor units.
    pub total_minor: i64,
}

impl Quote {
    /// Price an order, applying an optional discount fraction.
    ///
    /// # Errors
    ///
    /// Propagates the validation errors of [`order_total_minor`].
    pub fn new(quantity: i64, percent_off: f64) -> Result<Self> {
        let total_minor = order_total_minor(quantity, percent_off)?;
        Ok(Self {
            unit_price_minor: UNIT_PRICE_MINOR,
            quantity,
            percent_off,
            total_minor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undiscounted_total_is_unit_price_times_quantity() {
        assert_eq!(order_total_minor(1, 0.0).unwrap(), 9000);
        assert_eq!(order_total_minor(3, 0.0).unwrap(), 27000);
        assert_eq!(order_total_minor(100, 0.0).unwrap(), 900_000);
    }

    #[test]
    fn ten_percent_off_three_units() {
        // 9000 * 3 * 0.9 = 24300
        assert_eq!(order_total_minor(3, 0.10).unwrap(), 24_300);
    }

    #[test]
    fn fractional_minor_units_round_half_up() {
        // 9000 * 0.95 = 8550 exactly; 9000 * 0.667 = 6002.999... -> 6003
        assert_eq!(order_total_minor(1, 0.05).unwrap(), 8550);
        assert_eq!(order_total_minor(1, 0.333).unwrap(), 6003);
    }

    #[test]
    fn zero_and_negative_quantities_rejected() {
        assert!(matches!(
            order_total_minor(0, 0.0),
            Err(PricingError::InvalidQuantity { quantity: 0 })
        ));
        assert!(matches!(
            order_total_minor(-2, 0.0),
            Err(PricingError::InvalidQuantity { quantity: -2 })
        ));
    }

    #[test]
    fn overflowing_quantity_rejected() {
        assert!(matches!(
            order_total_minor(i64::MAX, 0.0),
            Err(PricingError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn discount_fraction_must_be_below_one() {
        assert!(matches!(
            order_total_minor(1, 1.0),
            Err(PricingError::InvalidDiscount { .. })
        ));
        assert!(matches!(
            order_total_minor(1, -0.1),
            Err(PricingError::InvalidDiscount { .. })
        ));
        assert!(order_total_minor(1, 0.999).is_ok());
    }

    #[test]
    fn major_to_minor_rounds_to_cents() {
        assert_eq!(major_to_minor(12.34).unwrap(), 1234);
        assert_eq!(major_to_minor(100.0).unwrap(), 10_000);
        assert_eq!(major_to_minor(0.01).unwrap(), 1);
    }

    #[test]
    fn major_to_minor_rejects_non_positive_amounts() {
        assert!(major_to_minor(0.0).is_err());
        assert!(major_to_minor(-5.0).is_err());
        assert!(major_to_minor(f64::NAN).is_err());
        assert!(major_to_minor(f64::INFINITY).is_err());
    }

    #[test]
    fn major_to_minor_rejects_amounts_beyond_minor_range() {
        // 1e17 * 100 = 1e19 > i64::MAX, which would saturate the cast.
        assert!(matches!(
            major_to_minor(1e17),
            Err(PricingError::InvalidAmount { .. })
        ));
        assert!(major_to_minor(f64::MAX).is_err());
        // Large but representable amounts still convert exactly.
        assert_eq!(major_to_minor(1e15).unwrap(), 100_000_000_000_000_000);
    }

    #[test]
    fn quote_carries_computed_total() {
        let quote = Quote::new(3, 0.10).unwrap();
        assert_eq!(quote.unit_price_minor, 9000);
        assert_eq!(quote.quantity, 3);
        assert_eq!(quote.total_minor, 24_300);
    }
}
