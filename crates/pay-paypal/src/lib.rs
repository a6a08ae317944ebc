//! # pay-paypal
//!
//! PayPal order gateway for the checkout relay.
//!
//! The storefront never sees PayPal credentials. This crate signs every call
//! server-side:
//!
//! 1. **TokenProvider** - client-credentials exchange for a bearer token
//! 2. **PayPalOrderGateway** - Orders v2 create and capture
//! 3. **normalize** - relays the provider's status and JSON body as-is
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_paypal::PayPalOrderGateway;
//! use pay_core::{CartItem, Money, OrderGateway};
//!
//! // Create gateway from environment (PAYPAL_CLIENT_ID, PAYPAL_CLIENT_SECRET, PAYPAL_ENV)
//! let gateway = PayPalOrderGateway::from_env()?;
//!
//! let cart = vec![CartItem::new(Money::new("USD", "100.00"))];
//! let created = gateway.create_order(&cart).await?;
//!
//! // Buyer approves in the PayPal popup, then:
//! let order_id = created.parsed_body["id"].as_str().unwrap_or_default();
//! let captured = gateway.capture_order(order_id).await?;
//! ```

pub mod auth;
pub mod config;
pub mod orders;
pub mod response;

// Re-exports
pub use auth::{AccessToken, TokenProvider};
pub use config::{PayPalConfig, PayPalEnvironment, LIVE_API_BASE_URL, SANDBOX_API_BASE_URL};
pub use orders::{PayPalOrderGateway, MOCK_RESPONSE_HEADER};
pub use response::normalize;
