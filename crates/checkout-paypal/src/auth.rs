//! # OAuth2 Access Tokens
//!
//! Client-credentials token acquisition against `/v1/oauth2/token`, with an
//! in-process cache so sequential gateway calls reuse one token until it
//! nears expiry.

use crate::config::PayPalConfig;
use checkout_core::{CheckoutError, CheckoutResult};
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

/// Refresh this many seconds ahead of the reported expiry
const EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        self.expires_at > Utc::now()
    }
}

/// Cache of the client-credentials access token
#[derive(Debug, Default)]
pub struct TokenCache {
    inner: RwLock<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Return a valid access token, fetching a fresh one when the cached
    /// token is missing or near expiry.
    pub async fn access_token(
        &self,
        client: &Client,
        config: &PayPalConfig,
    ) -> CheckoutResult<String> {
        if let Some(token) = self.inner.read().await.as_ref() {
            if token.is_fresh() {
                return Ok(token.access_token.clone());
            }
        }

        let fresh = fetch_access_token(client, config).await?;
        let access_token = fresh.access_token.clone();
        *self.inner.write().await = Some(fresh);
        Ok(access_token)
    }
}

async fn fetch_access_token(client: &Client, config: &PayPalConfig) -> CheckoutResult<CachedToken> {
    let url = format!("{}/v1/oauth2/token", config.api_base_url);

    debug!("Requesting client-credentials access token");

    let response = client
        .post(&url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| CheckoutError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| CheckoutError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(CheckoutError::TokenAcquisition(format!(
            "HTTP {}: {}",
            status, body
        )));
    }

    let token: TokenResponse = serde_json::from_str(&body).map_err(|e| {
        CheckoutError::Serialization(format!("Failed to parse token response: {}", e))
    })?;

    let ttl = (token.expires_in - EXPIRY_MARGIN_SECS).max(0);
    Ok(CachedToken {
        access_token: token.access_token,
        expires_at: Utc::now() + Duration::seconds(ttl),
    })
}
