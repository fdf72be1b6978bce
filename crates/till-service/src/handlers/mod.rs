//! API handlers.

pub mod discounts;
pub mod health;
pub mod payments;
pub mod refunds;
pub mod webhooks;
