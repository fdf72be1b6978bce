//! Discount codes for the storefront.
//!
//! Codes are matched case-insensitively and map to a percentage-off fraction
//! in the half-open range `[0, 1)`. The table is built once at startup and
//! never mutated afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};

/// A discount code that matched the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    /// The normalized (uppercase) code.
    pub code: String,
    /// Fraction off the order total, in `[0, 1)`.
    pub percent_off: f64,
}

/// Case-insensitive lookup table of discount codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountTable {
    codes: HashMap<String, f64>,
}

impl Default for DiscountTable {
    fn default() -> Self {
        let mut codes = HashMap::new();
        codes.insert("SALE10".to_string(), 0.10);
        codes.insert("WELCOME5".to_string(), 0.05);
        codes.insert("VIP20".to_string(), 0.20);
        Self { codes }
    }
}

impl DiscountTable {
    /// Create an empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            codes: HashMap::new(),
        }
    }

    /// Build a table from `(code, fraction)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidDiscount`] if any fraction is outside
    /// `[0, 1)`.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let mut table = Self::empty();
        for (code, fraction) in pairs {
            table.insert(&code, fraction)?;
        }
        Ok(table)
    }

    /// Add a code to the table, normalizing it to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidDiscount`] if the fraction is outside
    /// `[0, 1)`.
    pub fn insert(&mut self, code: &str, fraction: f64) -> Result<()> {
        if !(0.0..1.0).contains(&fraction) {
            return Err(PricingError::InvalidDiscount { fraction });
        }
        self.codes.insert(normalize(code), fraction);
        Ok(())
    }

    /// Look up a code, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<Discount> {
        let code = normalize(code);
        self.codes.get(&code).map(|&percent_off| Discount {
            code,
            percent_off,
        })
    }

    /// Number of configured codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table has no codes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
