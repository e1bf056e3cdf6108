//! # PayPal Configuration
//!
//! Configuration management for the PayPal integration.
//! All secrets are loaded from environment variables; the resulting value is
//! immutable and injected into the gateway at startup.

use crate::assertion::build_auth_assertion;
use checkout_core::CheckoutError;
use std::env;

/// Sandbox REST endpoint
pub const SANDBOX_API_BASE_URL: &str = "https://api-m.sandbox.paypal.com";

/// Live REST endpoint
pub const LIVE_API_BASE_URL: &str = "https://api-m.paypal.com";

/// PayPal API configuration
#[derive(Debug, Clone)]
pub struct PayPalConfig {
    /// REST app client id
    pub client_id: String,

    /// REST app client secret
    pub client_secret: String,

    /// Merchant payer id the platform acts on behalf of (multiparty flows)
    pub seller_payer_id: Option<String>,

    /// Partner attribution (BN) code
    pub bn_code: Option<String>,

    /// Whether merchant-context calls carry a PayPal-Auth-Assertion header.
    /// Only effective when `seller_payer_id` is set.
    pub attach_auth_assertion: bool,

    /// API base URL (for sandbox/live selection and test mocking)
    pub api_base_url: String,
}

impl PayPalConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `PAYPAL_CLIENT_ID`
    /// - `PAYPAL_CLIENT_SECRET`
    ///
    /// Optional env vars:
    /// - `PAYPAL_SELLER_PAYER_ID`
    /// - `PAYPAL_BN_CODE`
    /// - `PAYPAL_ATTACH_AUTH_ASSERTION` (default: true)
    /// - `PAYPAL_API_BASE_URL` (default: sandbox)
    pub fn from_env() -> Result<Self, CheckoutError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let client_id = env::var("PAYPAL_CLIENT_ID").map_err(|_| {
            CheckoutError::Configuration("PAYPAL_CLIENT_ID not set".to_string())
        })?;

        let client_secret = env::var("PAYPAL_CLIENT_SECRET").map_err(|_| {
            CheckoutError::Configuration("PAYPAL_CLIENT_SECRET not set".to_string())
        })?;

        if client_id.is_empty() {
            return Err(CheckoutError::Configuration(
                "PAYPAL_CLIENT_ID is empty".to_string(),
            ));
        }

        if client_secret.is_empty() {
            return Err(CheckoutError::Configuration(
                "PAYPAL_CLIENT_SECRET is empty".to_string(),
            ));
        }

        let seller_payer_id = env::var("PAYPAL_SELLER_PAYER_ID")
            .ok()
            .filter(|v| !v.is_empty());

        let bn_code = env::var("PAYPAL_BN_CODE").ok().filter(|v| !v.is_empty());

        let attach_auth_assertion = env::var("PAYPAL_ATTACH_AUTH_ASSERTION")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(true);

        let api_base_url = env::var("PAYPAL_API_BASE_URL")
            .unwrap_or_else(|_| SANDBOX_API_BASE_URL.to_string());

        Ok(Self {
            client_id,
            client_secret,
            seller_payer_id,
            bn_code,
            attach_auth_assertion,
            api_base_url,
        })
    }

    /// Create config with explicit credentials (for testing)
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            seller_payer_id: None,
            bn_code: None,
            attach_auth_assertion: true,
            api_base_url: SANDBOX_API_BASE_URL.to_string(),
        }
    }

    /// Builder: set the merchant payer id
    pub fn with_seller_payer_id(mut self, payer_id: impl Into<String>) -> Self {
        self.seller_payer_id = Some(payer_id.into());
        self
    }

    /// Builder: set the partner attribution code
    pub fn with_bn_code(mut self, bn_code: impl Into<String>) -> Self {
        self.bn_code = Some(bn_code.into());
        self
    }

    /// Builder: toggle auth-assertion attachment
    pub fn with_auth_assertion(mut self, attach: bool) -> Self {
        self.attach_auth_assertion = attach;
        self
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Check if pointed at the sandbox environment
    pub fn is_sandbox(&self) -> bool {
        self.api_base_url == SANDBOX_API_BASE_URL
    }

    /// The auth-assertion header value for merchant-context calls, when
    /// enabled and a merchant is configured
    pub fn auth_assertion(&self) -> Option<String> {
        if !self.attach_auth_assertion {
            return None;
        }
        self.seller_payer_id
            .as_deref()
            .map(|payer_id| build_auth_assertion(&self.client_id, payer_id))
    }
}
