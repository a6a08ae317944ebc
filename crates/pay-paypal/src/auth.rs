//! # Access Tokens
//!
//! OAuth2 client-credentials exchange against `/v1/oauth2/token`.
//! A token is fetched fresh for every gateway operation and never cached.

use crate::config::PayPalConfig;
use pay_core::TokenError;
use reqwest::{header::AUTHORIZATION, Client};
use serde::Deserialize;
use std::fmt;
use tracing::{debug, error, instrument};

/// Bearer token returned by the token endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Exchanges client credentials for short-lived bearer tokens
#[derive(Clone)]
pub struct TokenProvider {
    config: PayPalConfig,
    client: Client,
}

impl TokenProvider {
    pub fn new(config: PayPalConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Obtain a new access token.
    ///
    /// Fails with `MissingCredentials` before any network call when the id or
    /// secret is not configured. Every failure is logged here and returned.
    #[instrument(skip(self))]
    pub async fn access_token(&self) -> Result<AccessToken, TokenError> {
        self.request_token().await.map_err(|e| {
            error!("Failed to generate access token: {}", e);
            e
        })
    }

    async fn request_token(&self) -> Result<AccessToken, TokenError> {
        let auth = self.config.basic_auth_header()?;

        let response = self
            .client
            .post(self.config.token_url())
            .header(AUTHORIZATION, auth)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| TokenError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TokenError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(TokenError::InvalidResponse(format!("HTTP {}: {}", status, body)));
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| TokenError::InvalidResponse(e.to_string()))?;

        debug!(
            token_type = token.token_type.as_deref().unwrap_or("unknown"),
            expires_in = ?token.expires_in,
            "Obtained PayPal access token"
        );

        Ok(AccessToken(token.access_token))
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}
