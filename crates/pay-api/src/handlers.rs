//! # Request Handlers
//!
//! Axum request handlers for the relay API.
//! Order handlers relay the provider's status and body verbatim; any failure
//! becomes a `500` with a fixed message and no internal detail.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pay_core::{CartItem, PaymentError, PaymentResult, UpstreamResponse};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

pub const CREATE_ORDER_FAILED: &str = "Failed to create order.";
pub const CAPTURE_ORDER_FAILED: &str = "Failed to capture order.";

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create order request
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Cart line items; only the first one prices the order
    pub cart: Vec<CartItem>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn internal_error(message: &str) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(message)),
    )
}

/// Turn a normalized upstream response into the reply for the storefront
fn relay(upstream: UpstreamResponse) -> PaymentResult<Response> {
    let status = StatusCode::from_u16(upstream.status_code).map_err(|_| {
        PaymentError::ResponseParse(format!(
            "Invalid upstream status code: {}",
            upstream.status_code
        ))
    })?;

    Ok((status, Json(upstream.parsed_body)).into_response())
}

// =============================================================================
// Handlers
// =============================================================================

/// Liveness check; never touches the provider
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "running" }))
}

/// Create an order from the storefront cart
#[instrument(skip(state, body), fields(provider = state.gateway.provider_name()))]
pub async fn create_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    create_order_internal(&state, &body).await.map_err(|e| {
        error!(kind = e.kind(), "Failed to create order: {}", e);
        internal_error(CREATE_ORDER_FAILED)
    })
}

async fn create_order_internal(state: &AppState, body: &[u8]) -> PaymentResult<Response> {
    let request: CreateOrderRequest = serde_json::from_slice(body)
        .map_err(|e| PaymentError::InvalidRequest(format!("Malformed order request: {}", e)))?;

    info!("Creating order: {} cart items", request.cart.len());

    let upstream = state.gateway.create_order(&request.cart).await?;
    relay(upstream)
}

/// Capture a previously created order
#[instrument(skip(state), fields(provider = state.gateway.provider_name()))]
pub async fn capture_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Response, ApiError> {
    info!("Capturing order: {}", order_id);

    state
        .gateway
        .capture_order(&order_id)
        .await
        .and_then(relay)
        .map_err(|e| {
            error!(kind = e.kind(), "Failed to capture order {}: {}", order_id, e);
            internal_error(CAPTURE_ORDER_FAILED)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({ "error": "Test error" })
        );
    }

    #[test]
    fn test_relay_keeps_status() {
        let response = relay(UpstreamResponse::new(422, json!({ "name": "UNPROCESSABLE_ENTITY" })))
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_relay_rejects_invalid_status() {
        let err = relay(UpstreamResponse::new(42, json!({}))).unwrap_err();
        assert!(matches!(err, PaymentError::ResponseParse(_)));
    }

    #[test]
    fn test_request_requires_cart() {
        assert!(serde_json::from_value::<CreateOrderRequest>(json!({})).is_err());
        assert!(serde_json::from_value::<CreateOrderRequest>(json!({ "cart": [] })).is_ok());
    }
}
