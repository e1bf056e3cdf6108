//! # Checkout Error Types
//!
//! Typed error handling for the checkout relay.
//! All fallible operations return `Result<T, CheckoutError>`.

use thiserror::Error;

/// Core error type for all checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Configuration errors (missing credentials, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Order template not found in the catalog
    #[error("Order template not found: {template_id}")]
    TemplateNotFound { template_id: String },

    /// Malformed monetary amount or quantity
    #[error("Invalid amount: {message}")]
    InvalidAmount { message: String },

    /// Payment provider rejected the call (non-2xx vendor response)
    #[error("Provider error [{provider}] (HTTP {status}): {message}")]
    Provider {
        provider: String,
        status: u16,
        message: String,
    },

    /// Network/HTTP error communicating with the provider
    #[error("Network error: {0}")]
    Network(String),

    /// OAuth access-token acquisition failed
    #[error("Token acquisition failed: {0}")]
    TokenAcquisition(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CheckoutError {
    /// Returns true if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            CheckoutError::Network(_) | CheckoutError::TokenAcquisition(_) => true,
            CheckoutError::Provider { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::Configuration(_) => 500,
            CheckoutError::InvalidRequest(_) => 400,
            CheckoutError::TemplateNotFound { .. } => 404,
            CheckoutError::InvalidAmount { .. } => 400,
            CheckoutError::Provider { .. } => 502,
            CheckoutError::Network(_) => 503,
            CheckoutError::TokenAcquisition(_) => 502,
            CheckoutError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
