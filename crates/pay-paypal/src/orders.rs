//! # PayPal Orders
//!
//! Implementation of the PayPal Orders v2 API (create + capture).
//! Both calls fetch a fresh access token, issue exactly one upstream request,
//! and hand the response to the normalizer untouched.

use crate::auth::TokenProvider;
use crate::config::PayPalConfig;
use crate::response::normalize;
use async_trait::async_trait;
use pay_core::{
    CartItem, CreateOrderPayload, OrderGateway, PaymentError, PaymentResult, UpstreamResponse,
};
use reqwest::{header::CONTENT_TYPE, Client};
use tracing::{debug, info, instrument, warn};

/// Header PayPal's sandbox reads to force error responses
pub const MOCK_RESPONSE_HEADER: &str = "PayPal-Mock-Response";

/// PayPal order gateway
pub struct PayPalOrderGateway {
    config: PayPalConfig,
    client: Client,
    tokens: TokenProvider,
}

impl PayPalOrderGateway {
    /// Create a new PayPal gateway
    pub fn new(config: PayPalConfig) -> PaymentResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        let tokens = TokenProvider::new(config.clone(), client.clone());

        Ok(Self {
            config,
            client,
            tokens,
        })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = PayPalConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &PayPalConfig {
        &self.config
    }
}

#[async_trait]
impl OrderGateway for PayPalOrderGateway {
    #[instrument(skip(self, cart), fields(items = cart.len()))]
    async fn create_order(&self, cart: &[CartItem]) -> PaymentResult<UpstreamResponse> {
        debug!(?cart, "Creating PayPal order");

        let payload = CreateOrderPayload::from_cart(cart)?;
        let token = self.tokens.access_token().await?;

        let response = self
            .client
            .post(self.config.orders_url())
            .bearer_auth(token.as_str())
            .json(&payload)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let result = normalize(response).await?;
        log_outcome("create order", &result);
        Ok(result)
    }

    #[instrument(skip(self))]
    async fn capture_order(&self, order_id: &str) -> PaymentResult<UpstreamResponse> {
        let url = self.config.capture_url(order_id)?;
        let token = self.tokens.access_token().await?;

        let mut request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(token.as_str());

        if let Some(mock) = &self.config.mock_response {
            debug!("Forcing sandbox mock response: {}", mock);
            request = request.header(MOCK_RESPONSE_HEADER, mock);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let result = normalize(response).await?;
        log_outcome("capture order", &result);
        Ok(result)
    }

    fn provider_name(&self) -> &'static str {
        "paypal"
    }
}

fn log_outcome(operation: &str, result: &UpstreamResponse) {
    if result.is_success() {
        info!(status = result.status_code, "PayPal {} succeeded", operation);
    } else {
        warn!(
            status = result.status_code,
            "PayPal {} rejected: {}", operation, result.parsed_body
        );
    }
}
