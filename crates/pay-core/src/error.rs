//! # Payment Error Types
//!
//! Typed error handling for the checkout relay.
//! All gateway operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Failure to obtain an OAuth2 access token from the provider.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Client id or client secret not configured
    #[error("MISSING_API_CREDENTIALS")]
    MissingCredentials,

    /// Transport failure calling the token endpoint
    #[error("Token request failed: {0}")]
    Network(String),

    /// Token endpoint answered with something other than a token
    #[error("Invalid token response: {0}")]
    InvalidResponse(String),
}

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data (empty or malformed cart)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Access token could not be obtained
    #[error("Failed to generate access token: {0}")]
    Token(#[from] TokenError),

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Non-empty upstream body that is not JSON
    #[error("Error parsing response: {0}")]
    ResponseParse(String),
}

impl PaymentError {
    /// Short, stable name of the error kind (for structured logs)
    pub fn kind(&self) -> &'static str {
        match self {
            PaymentError::Configuration(_) => "configuration",
            PaymentError::InvalidRequest(_) => "invalid_request",
            PaymentError::Token(_) => "token",
            PaymentError::NetworkError(_) => "network",
            PaymentError::ResponseParse(_) => "response_parse",
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
