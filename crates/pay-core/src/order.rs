//! # Order Types
//!
//! Cart and order payload types for the checkout relay.
//!
//! The relay keeps no order records. A cart lives for one create-order call,
//! and an order is only ever referenced by the id the provider assigned.

use crate::error::{PaymentError, PaymentResult};
use serde::{Deserialize, Deserializer, Serialize};

/// A monetary amount as the provider expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// ISO-4217 currency code (e.g. "USD")
    pub currency_code: String,

    /// Decimal amount as a string (e.g. "100.00")
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
}

impl Money {
    pub fn new(currency_code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
            value: value.into(),
        }
    }
}

/// A line item as sent by the storefront client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Unit price of the item
    pub unit_amount: Money,

    /// Everything else the client sent (id, quantity, metadata), kept verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CartItem {
    pub fn new(unit_amount: Money) -> Self {
        Self {
            unit_amount,
            extra: serde_json::Map::new(),
        }
    }

    /// Attach an extra field (quantity, sku, ...)
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Order intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderIntent {
    /// Capture funds immediately after approval
    Capture,
}

/// A purchase unit in an order payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseUnit {
    pub amount: Money,
}

/// Body of an upstream create-order call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderPayload {
    pub intent: OrderIntent,
    pub purchase_units: Vec<PurchaseUnit>,
}

impl CreateOrderPayload {
    /// Build the payload from a cart.
    ///
    /// Only the first item's `unit_amount` becomes the order total. Additional
    /// items are accepted but not aggregated: checkout is single-item.
    pub fn from_cart(cart: &[CartItem]) -> PaymentResult<Self> {
        let first = cart
            .first()
            .ok_or_else(|| PaymentError::InvalidRequest("Cart has no items".to_string()))?;

        Ok(Self {
            intent: OrderIntent::Capture,
            purchase_units: vec![PurchaseUnit {
                amount: first.unit_amount.clone(),
            }],
        })
    }
}

/// Accept `"10.00"` as well as `10.0` for amounts
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}
