//! # Upstream Responses
//!
//! Uniform `{ parsed_body, status_code }` view of a provider response.

use crate::error::{PaymentError, PaymentResult};
use serde::{Deserialize, Serialize};

/// A provider response, ready to be relayed to the storefront client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamResponse {
    /// Parsed JSON body (`{}` when the provider sent no body)
    pub parsed_body: serde_json::Value,

    /// Provider HTTP status, relayed verbatim
    pub status_code: u16,
}

impl UpstreamResponse {
    pub fn new(status_code: u16, parsed_body: serde_json::Value) -> Self {
        Self {
            parsed_body,
            status_code,
        }
    }

    /// Normalize a status code and raw body text.
    ///
    /// Empty bodies (legal on some error paths) become an empty object.
    /// Anything else must be JSON.
    pub fn from_parts(status_code: u16, text: &str) -> PaymentResult<Self> {
        let parsed_body = if text.is_empty() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            serde_json::from_str(text).map_err(|e| PaymentError::ResponseParse(e.to_string()))?
        };

        Ok(Self::new(status_code, parsed_body))
    }

    /// Whether the provider reported success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
