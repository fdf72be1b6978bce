//! Payment processor integration.
//!
//! The external processor owns the hard parts of the payment flow:
//!
//! - Hosted payment sessions and the browser payment component
//! - Payment authorization, capture, and decline decisions
//! - Refund settlement and idempotency
//!
//! This module is a thin HTTP client over that API. Processor responses are
//! captured verbatim and forwarded to the storefront unchanged.

pub mod client;
pub mod types;

pub use client::{ProcessorClient, ProcessorError};
pub use types::*;
