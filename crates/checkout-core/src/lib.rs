//! # checkout-core
//!
//! Core types and traits for the paypal-checkout-rs relay.
//!
//! This crate provides:
//! - `Money` and `Currency` for decimal-string amounts
//! - The order wire model: `OrderRequest`, `PurchaseUnit`, `Item`,
//!   `ShippingOption`
//! - `OrderTemplate` and `TemplateCatalog` for configurable order data
//! - `PaymentGateway` trait for implementing payment providers
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{OrderTemplate, PaymentGateway};
//!
//! // Load the order template
//! let template = catalog.get("standard").unwrap();
//!
//! // Create an order through a gateway
//! let response = gateway.create_order(template).await?;
//!
//! // Relay the vendor body verbatim
//! println!("{} {}", response.status, response.body);
//! ```

pub mod error;
pub mod gateway;
pub mod money;
pub mod order;
pub mod template;

// Re-exports for convenience
pub use error::{CheckoutError, CheckoutResult};
pub use gateway::{BoxedPaymentGateway, GatewayResponse, PaymentGateway};
pub use money::{Currency, Money};
pub use order::{
    AmountBreakdown, AmountWithBreakdown, Item, ItemCategory, OrderIntent, OrderRequest, Payee,
    PurchaseUnit, Shipping, ShippingOption, ShippingType,
};
pub use template::{OrderTemplate, TemplateCatalog};
