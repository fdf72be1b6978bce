//! Service configuration.
//!
//! All configuration is read from environment variables once at startup and
//! is immutable afterwards. Handlers receive it through `AppState`; nothing
//! reads the environment at request time.

use till_core::DiscountTable;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// Payment processor API base URL (default: sandbox gateway).
    pub processor_api_url: String,

    /// Payment processor secret key (optional; payment routes fail without it).
    pub processor_secret_key: Option<String>,

    /// Payment processor processing channel ID (optional).
    pub processor_channel_id: Option<String>,

    /// Shared secret for webhook signature verification (optional; the
    /// webhook route fails without it).
    pub webhook_secret: Option<String>,

    /// Billing address country sent with every payment session.
    pub billing_country: String,

    /// Customer name sent with every payment session.
    pub customer_name: String,

    /// Customer email sent with every payment session.
    pub customer_email: String,

    /// Redirect URL for completed payments.
    pub success_url: String,

    /// Redirect URL for failed payments.
    pub failure_url: String,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// Discount code table.
    pub discounts: DiscountTable,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            processor_api_url: std::env::var("PROCESSOR_API_URL")
                .unwrap_or_else(|_| "https://api.sandbox.checkout.com".into()),
            processor_secret_key: std::env::var("PROCESSOR_SECRET_KEY").ok(),
            processor_channel_id: std::env::var("PROCESSOR_CHANNEL_ID").ok(),
            webhook_secret: std::env::var("WEBHOOK_SECRET").ok(),
            billing_country: std::env::var("BILLING_COUNTRY").unwrap_or_else(|_| "HK".into()),
            customer_name: std::env::var("CUSTOMER_NAME")
                .unwrap_or_else(|_| "Storefront Customer".into()),
            customer_email: std::env::var("CUSTOMER_EMAIL")
                .unwrap_or_else(|_| "customer@example.com".into()),
            success_url: std::env::var("PAYMENT_SUCCESS_URL")
                .unwrap_or_else(|_| "http://localhost:3000/success".into()),
            failure_url: std::env::var("PAYMENT_FAILURE_URL")
                .unwrap_or_else(|_| "http://localhost:3000/failure".into()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024), // 1MB
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            discounts: load_discounts(),
        }
    }
}

/// Load the discount table from the environment or fall back to the defaults.
///
/// `DISCOUNT_CODES` holds comma-separated `CODE:fraction` pairs, e.g.
/// `SALE10:0.10,VIP20:0.20`. An unset variable yields the built-in table.
fn load_discounts() -> DiscountTable {
    let Ok(raw) = std::env::var("DISCOUNT_CODES") else {
        return DiscountTable::default();
    };
    parse_discounts(&raw)
}

/// Parse a comma-separated `CODE:fraction` list into a discount table.
///
/// Malformed entries are skipped with a warning; if no entry survives, the
/// built-in table is used instead.
fn parse_discounts(raw: &str) -> DiscountTable {
    let mut table = DiscountTable::empty();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let Some((code, fraction)) = entry.split_once(':') else {
            tracing::warn!(entry = %entry, "Skipping malformed discount entry");
            continue;
        };
        let Ok(fraction) = fraction.trim().parse::<f64>() else {
            tracing::warn!(entry = %entry, "Skipping discount entry with unparsable fraction");
            continue;
        };
        if let Err(e) = table.insert(code, fraction) {
            tracing::warn!(entry = %entry, error = %e, "Skipping invalid discount entry");
        }
    }

    if table.is_empty() {
        tracing::warn!("DISCOUNT_CODES set but yielded no valid entries, using defaults");
        return DiscountTable::default();
    }
    table
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            processor_api_url: "https://api.sandbox.checkout.com".into(),
            processor_secret_key: None,
            processor_channel_id: None,
            webhook_secret: None,
            billing_country: "HK".into(),
            customer_name: "Storefront Customer".into(),
            customer_email: "customer@example.com".into(),
            success_url: "http://localhost:3000/success".into(),
            failure_url: "http://localhost:3000/failure".into(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
            discounts: DiscountTable::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_discounts_reads_code_fraction_pairs() {
        let table = parse_discounts("SALE10:0.10, vip20:0.20");
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("sale10").unwrap().percent_off, 0.10);
        assert_eq!(table.lookup("VIP20").unwrap().code, "VIP20");
    }

    #[test]
    fn parse_discounts_skips_malformed_entries() {
        // Missing separator, unparsable fraction, fraction outside [0, 1).
        let table = parse_discounts("SALE10:0.10,BROKEN,BAD:abc,FULL:1.5");
        assert_eq!(table.len(), 1);
        assert!(table.lookup("SALE10").is_some());
        assert!(table.lookup("BROKEN").is_none());
        assert!(table.lookup("BAD").is_none());
        assert!(table.lookup("FULL").is_none());
    }

    #[test]
    fn parse_discounts_falls_back_when_nothing_valid() {
        let table = parse_discounts("nonsense");
        assert!(table.lookup("SALE10").is_some());
        assert!(table.lookup("WELCOME5").is_some());
    }
}
