//! # Application State
//!
//! Shared state for the Axum application.
//! Holds immutable configuration and the order gateway; nothing per-request.

use pay_core::BoxedOrderGateway;
use pay_paypal::PayPalOrderGateway;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

const DEFAULT_PORT: u16 = 8080;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory of static storefront assets
    pub static_dir: PathBuf,
    /// HTML document served at `/`
    pub index_file: PathBuf,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "client".to_string());
        let index_file = std::env::var("INDEX_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(&static_dir).join("checkout.html"));

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_port(std::env::var("PORT").ok().as_deref()),
            static_dir: PathBuf::from(static_dir),
            index_file,
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// Listening port from `PORT`; falls back to 8080 (with a warning if set but invalid)
fn parse_port(raw: Option<&str>) -> u16 {
    match raw.map(str::trim) {
        None | Some("") => DEFAULT_PORT,
        Some(value) => value.parse().unwrap_or_else(|_| {
            warn!("Invalid PORT {:?}, falling back to {}", value, DEFAULT_PORT);
            DEFAULT_PORT
        }),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("client"),
            index_file: PathBuf::from("client/checkout.html"),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Order gateway (PayPal in production, stubs in tests)
    pub gateway: BoxedOrderGateway,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state from explicit parts
    pub fn new(config: AppConfig, gateway: BoxedOrderGateway) -> Self {
        Self { gateway, config }
    }

    /// Load everything from the environment (process start only)
    pub fn from_env() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let gateway = PayPalOrderGateway::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize PayPal: {}", e))?;

        let paypal = gateway.config();
        info!("PayPal environment: {}", paypal.environment);
        info!("PayPal API base: {}", paypal.api_base_url);
        if !paypal.has_credentials() {
            warn!("PAYPAL_CLIENT_ID / PAYPAL_CLIENT_SECRET not set; order calls will fail");
        }
        if paypal.mock_response.is_some() {
            warn!("PAYPAL_MOCK_RESPONSE is set; captures will return forced sandbox errors");
        }

        Ok(Self::new(config, Arc::new(gateway) as BoxedOrderGateway))
    }
}
