//! Payment processor API client implementation.

use std::time::Duration;

use reqwest::Client;

use super::types::{PaymentSessionRequest, RefundRequest, SessionSubmitRequest, UpstreamResponse};

/// Error type for processor operations.
///
/// Only transport failures are errors here. A response from the processor,
/// whatever its status, is returned as an [`UpstreamResponse`] so it can be
/// forwarded to the caller verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ProcessorError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Payment processor API client.
#[derive(Debug, Clone)]
pub struct ProcessorClient {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl ProcessorClient {
    /// Create a new processor client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Processor API URL (e.g. `"https://api.sandbox.checkout.com"`)
    /// * `secret_key` - Processor secret key used as a bearer token
    ///
    /// # Errors
    ///
    /// Returns [`ProcessorError::Http`] if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, ProcessorError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            secret_key: secret_key.into(),
        })
    }

    /// Create a hosted payment session.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessorError::Http`] on transport failure.
    pub async fn create_payment_session(
        &self,
        request: &PaymentSessionRequest,
    ) -> Result<UpstreamResponse, ProcessorError> {
        let url = format!("{}/payment-sessions", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.secret_key))
            .json(request)
            .send()
            .await?;

        Self::capture(response).await
    }

    /// Submit collected payment-method data for an existing session.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessorError::Http`] on transport failure.
    pub async fn submit_payment_session(
        &self,
        session_id: &str,
        request: &SessionSubmitRequest,
    ) -> Result<UpstreamResponse, ProcessorError> {
        let url = format!("{}/payment-sessions/{}/submit", self.base_url, session_id);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.secret_key))
            .json(request)
            .send()
            .await?;

        Self::capture(response).await
    }

    /// Request a refund against a payment.
    ///
    /// The reference doubles as the idempotency key so a resubmitted refund
    /// is not applied twice by the processor.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessorError::Http`] on transport failure.
    pub async fn refund_payment(
        &self,
        payment_id: &str,
        request: &RefundRequest,
    ) -> Result<UpstreamResponse, ProcessorError> {
        let url = format!("{}/payments/{}/refunds", self.base_url, payment_id);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.secret_key))
            .header("Cko-Idempotency-Key", &request.reference)
            .json(request)
            .send()
            .await?;

        Self::capture(response).await
    }

    /// Capture a processor response for verbatim forwarding.
    async fn capture(response: reqwest::Response) -> Result<UpstreamResponse, ProcessorError> {
        let status = response.status();
        let content_type = response.headers().get(reqwest::header::CONTENT_TYPE).cloned();
        let body = response.bytes().await?;

        if !status.is_success() {
            tracing::warn!(status = %status, "Payment processor returned an error response");
        }

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
