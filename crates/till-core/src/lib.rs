//! Core pricing and discount types for the till gateway.
//!
//! This crate provides the domain types shared by the till service:
//!
//! - **Pricing**: `Quote`, `order_total_minor`, `major_to_minor`
//! - **Discounts**: `Discount`, `DiscountTable`
//! - **Errors**: `PricingError`
//!
//! # Minor Units
//!
//! **All amounts are `i64` minor units (cents).**
//!
//! - One storefront unit costs HK$90.00 → `9000` minor units
//! - A refund of HK$12.34 → `1234` minor units
//! - Stored as integers to avoid floating point precision issues; the only
//!   float math is the discount multiply and the major-unit conversion, both
//!   rounded half-up at the boundary

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod discounts;
pub mod error;
pub mod pricing;

pub use discounts::{Discount, DiscountTable};
pub use error::{PricingError, Result};
pub use pricing::{major_to_minor, order_total_minor, Quote, DEFAULT_CURRENCY, UNIT_PRICE_MINOR};
