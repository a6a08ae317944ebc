//! # pay-core
//!
//! Core types and traits for the checkout relay.
//!
//! This crate provides:
//! - `OrderGateway` trait for implementing payment providers
//! - `CartItem`, `Money` and `CreateOrderPayload` for the create-order flow
//! - `UpstreamResponse` for relaying provider answers
//! - `PaymentError` and `TokenError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{CartItem, Money, OrderGateway};
//!
//! let cart = vec![CartItem::new(Money::new("USD", "100.00"))];
//!
//! // Create the order upstream and relay whatever the provider answered
//! let response = gateway.create_order(&cart).await?;
//! println!("{} {}", response.status_code, response.parsed_body);
//!
//! // After the buyer approves, capture it
//! let captured = gateway.capture_order("5O190127TN364715T").await?;
//! ```

pub mod error;
pub mod order;
pub mod response;
pub mod strategy;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult, TokenError};
pub use order::{CartItem, CreateOrderPayload, Money, OrderIntent, PurchaseUnit};
pub use response::UpstreamResponse;
pub use strategy::{BoxedOrderGateway, OrderGateway};
