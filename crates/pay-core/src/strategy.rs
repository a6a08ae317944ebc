//! # Order Gateway Trait
//!
//! Strategy trait for the provider that creates and captures orders.
//! The HTTP layer only sees this trait, so the provider can be swapped
//! (or stubbed in tests) without touching the handlers.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │             OrderGateway (trait)            │
//! │  ├── create_order()                         │
//! │  ├── capture_order()                        │
//! │  └── provider_name()                        │
//! └─────────────────────────────────────────────┘
//!                       ▲
//!               ┌───────┴────────┐
//!               │ PayPalOrder    │
//!               │   Gateway      │
//!               └────────────────┘
//! ```

use crate::error::PaymentResult;
use crate::order::CartItem;
use crate::response::UpstreamResponse;
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment provider implementations.
///
/// Every call obtains its own credentials and issues its own upstream
/// request; implementations hold no per-order state.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Create an order from the storefront cart.
    ///
    /// # Returns
    /// The provider's response, status code and body untouched.
    async fn create_order(&self, cart: &[CartItem]) -> PaymentResult<UpstreamResponse>;

    /// Capture a previously created order.
    ///
    /// # Arguments
    /// * `order_id` - Provider-assigned order id
    async fn capture_order(&self, order_id: &str) -> PaymentResult<UpstreamResponse>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a boxed order gateway (dynamic dispatch)
pub type BoxedOrderGateway = Arc<dyn OrderGateway>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Money;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingGateway {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl OrderGateway for CountingGateway {
        async fn create_order(&self, cart: &[CartItem]) -> PaymentResult<UpstreamResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(UpstreamResponse::new(
                201,
                json!({ "amount": cart[0].unit_amount.value }),
            ))
        }

        async fn capture_order(&self, order_id: &str) -> PaymentResult<UpstreamResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(UpstreamResponse::new(201, json!({ "id": order_id })))
        }

        fn provider_name(&self) -> &'static str {
            "counting"
        }
    }

    #[tokio::test]
    async fn test_boxed_gateway_dispatch() {
        let gateway: BoxedOrderGateway = Arc::new(CountingGateway {
            calls: AtomicUsize::new(0),
        });

        let created = gateway
            .create_order(&[CartItem::new(Money::new("USD", "1.00"))])
            .await
            .unwrap();
        let captured = gateway.capture_order("ORDER-1").await.unwrap();

        assert_eq!(created.parsed_body["amount"], "1.00");
        assert_eq!(captured.parsed_body["id"], "ORDER-1");
        assert_eq!(gateway.provider_name(), "counting");
    }
}
