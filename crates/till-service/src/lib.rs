//! Till HTTP gateway service.
//!
//! This crate provides the HTTP surface between the storefront and the
//! payment processor:
//!
//! - Discount code validation
//! - Payment session creation and submission with server-computed amounts
//! - Refund forwarding
//! - Webhook signature verification and event dispatch
//!
//! # Trust Boundary
//!
//! The storefront browser is untrusted: every charge amount is recomputed
//! here from quantity and the configured discount table. The processor's
//! responses are forwarded to the storefront verbatim; its webhooks are
//! authenticated with an HMAC-SHA256 shared secret before any processing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers need async for the router signatures

pub mod config;
pub mod crypto;
pub mod error;
pub mod events;
pub mod handlers;
pub mod processor;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use events::{LogEvents, PaymentEvents, WebhookEvent};
pub use processor::{ProcessorClient, ProcessorError};
pub use routes::create_router;
pub use state::AppState;
