//! # checkout-paypal
//!
//! PayPal gateway for paypal-checkout-rs.
//!
//! This crate implements the `PaymentGateway` trait over the PayPal REST
//! API: order creation, capture, authorization, authorization-capture, and
//! refund. It owns the pieces the vendor SDK would normally hide:
//!
//! - OAuth2 client-credentials token acquisition with caching
//! - The unsigned `PayPal-Auth-Assertion` header for merchant-context calls
//! - Partner attribution and idempotency request-id headers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkout_core::{OrderTemplate, PaymentGateway};
//! use checkout_paypal::PayPalGateway;
//!
//! // Create the gateway from environment
//! let gateway = PayPalGateway::from_env()?;
//!
//! // Create an order and relay the vendor body
//! let response = gateway.create_order(&OrderTemplate::standard()).await?;
//! println!("order id: {}", response.body["id"]);
//! ```

pub mod assertion;
pub mod auth;
pub mod config;
pub mod orders;

// Re-exports
pub use assertion::build_auth_assertion;
pub use auth::TokenCache;
pub use config::{PayPalConfig, LIVE_API_BASE_URL, SANDBOX_API_BASE_URL};
pub use orders::PayPalGateway;
