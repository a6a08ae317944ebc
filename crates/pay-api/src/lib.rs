//! # pay-api
//!
//! HTTP API layer for the checkout relay.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Order endpoints that relay PayPal responses to the storefront
//! - Static serving of the storefront checkout page
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Checkout page |
//! | GET | `/test` | Liveness check |
//! | POST | `/orders` | Create order from cart |
//! | POST | `/orders/{order_id}/capture` | Capture order |
//!
//! Order endpoints are also available under `/api`.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
