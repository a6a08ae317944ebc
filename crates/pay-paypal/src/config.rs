//! # PayPal Configuration
//!
//! Configuration management for the PayPal integration.
//! Secrets are loaded from environment variables once at startup and then
//! handed to the token provider and gateway explicitly.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use pay_core::{PaymentError, PaymentResult, TokenError};
use reqwest::Url;
use std::{env, fmt, time::Duration};

/// Production REST endpoint
pub const LIVE_API_BASE_URL: &str = "https://api-m.paypal.com";

/// Sandbox REST endpoint
pub const SANDBOX_API_BASE_URL: &str = "https://api-m.sandbox.paypal.com";

/// Deployment environment of the PayPal account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayPalEnvironment {
    #[default]
    Sandbox,
    Live,
}

impl PayPalEnvironment {
    /// `live` selects production; any other value means sandbox
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("live") => PayPalEnvironment::Live,
            _ => PayPalEnvironment::Sandbox,
        }
    }

    pub fn api_base_url(&self) -> &'static str {
        match self {
            PayPalEnvironment::Live => LIVE_API_BASE_URL,
            PayPalEnvironment::Sandbox => SANDBOX_API_BASE_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PayPalEnvironment::Live => "live",
            PayPalEnvironment::Sandbox => "sandbox",
        }
    }
}

impl fmt::Display for PayPalEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// PayPal API configuration
#[derive(Clone)]
pub struct PayPalConfig {
    /// REST app client id
    pub client_id: Option<String>,

    /// REST app client secret
    pub client_secret: Option<String>,

    /// Live or sandbox
    pub environment: PayPalEnvironment,

    /// API base URL (derived from the environment unless overridden)
    pub api_base_url: String,

    /// `PayPal-Mock-Response` header value for sandbox negative testing
    pub mock_response: Option<String>,

    /// HTTP client timeout; `None` keeps reqwest's default (no timeout)
    pub timeout: Option<Duration>,
}

impl PayPalConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognised env vars:
    /// - `PAYPAL_CLIENT_ID`, `PAYPAL_CLIENT_SECRET`
    /// - `PAYPAL_ENV` (`live` or anything else for sandbox)
    /// - `PAYPAL_API_BASE_URL` (optional override)
    /// - `PAYPAL_MOCK_RESPONSE` (sandbox only)
    /// - `PAYPAL_TIMEOUT_SECS` (optional)
    ///
    /// Missing credentials are not an error here: the server still starts and
    /// every token request fails with `MISSING_API_CREDENTIALS`.
    pub fn from_env() -> PaymentResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> PaymentResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = PayPalEnvironment::parse(non_empty("PAYPAL_ENV").as_deref());

        let api_base_url = non_empty("PAYPAL_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| environment.api_base_url().to_string());

        let mock_response = non_empty("PAYPAL_MOCK_RESPONSE");
        if mock_response.is_some() && environment == PayPalEnvironment::Live {
            return Err(PaymentError::Configuration(
                "PAYPAL_MOCK_RESPONSE is only allowed in sandbox".to_string(),
            ));
        }

        let timeout = match non_empty("PAYPAL_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(raw.trim().parse().map_err(|_| {
                PaymentError::Configuration(format!(
                    "PAYPAL_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                    raw
                ))
            })?)),
            None => None,
        };

        Ok(Self {
            client_id: non_empty("PAYPAL_CLIENT_ID"),
            client_secret: non_empty("PAYPAL_CLIENT_SECRET"),
            environment,
            api_base_url,
            mock_response,
            timeout,
        })
    }

    /// Create sandbox config with explicit credentials (for testing)
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            client_secret: Some(client_secret.into()),
            environment: PayPalEnvironment::Sandbox,
            api_base_url: SANDBOX_API_BASE_URL.to_string(),
            mock_response: None,
            timeout: None,
        }
    }

    /// Check if both credentials are present
    pub fn has_credentials(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }

    /// Check if talking to production
    pub fn is_live(&self) -> bool {
        self.environment == PayPalEnvironment::Live
    }

    /// `Basic base64(client_id:client_secret)` for the token endpoint
    pub fn basic_auth_header(&self) -> Result<String, TokenError> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => {
                Ok(format!("Basic {}", STANDARD.encode(format!("{}:{}", id, secret))))
            }
            _ => Err(TokenError::MissingCredentials),
        }
    }

    /// OAuth2 client-credentials endpoint
    pub fn token_url(&self) -> String {
        format!("{}/v1/oauth2/token", self.api_base_url)
    }

    /// Order creation endpoint
    pub fn orders_url(&self) -> String {
        format!("{}/v2/checkout/orders", self.api_base_url)
    }

    /// Capture endpoint for one order.
    ///
    /// The id must look like a provider order id (ASCII letters, digits, `-`,
    /// `_`) and is appended as a single encoded path segment, so it can never
    /// address another endpoint.
    pub fn capture_url(&self, order_id: &str) -> PaymentResult<Url> {
        validate_order_id(order_id)?;

        let mut url = Url::parse(&self.api_base_url).map_err(|e| {
            PaymentError::Configuration(format!("Invalid API base URL: {}", e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                PaymentError::Configuration("API base URL cannot have a path".to_string())
            })?
            .pop_if_empty()
            .extend(["v2", "checkout", "orders"])
            .push(order_id)
            .push("capture");

        Ok(url)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: send `PayPal-Mock-Response` on capture calls
    pub fn with_mock_response(mut self, value: impl Into<String>) -> Self {
        self.mock_response = Some(value.into());
        self
    }
}

/// Reject order ids that could change the upstream path or query
pub fn validate_order_id(order_id: &str) -> PaymentResult<()> {
    let valid = !order_id.is_empty()
        && order_id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');

    if valid {
        Ok(())
    } else {
        Err(PaymentError::InvalidRequest(format!(
            "Invalid order id: {:?}",
            order_id
        )))
    }
}

impl fmt::Debug for PayPalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayPalConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .field("environment", &self.environment)
            .field("api_base_url", &self.api_base_url)
            .field("mock_response", &self.mock_response)
            .field("timeout", &self.timeout)
            .finish()
    }
}
