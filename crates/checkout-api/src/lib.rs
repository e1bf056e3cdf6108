//! # checkout-api
//!
//! HTTP API layer for paypal-checkout-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints relaying the five checkout operations to the gateway
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Liveness message |
//! | POST | `/api/orders` | Create order |
//! | POST | `/api/orders/{order_id}/capture` | Capture order |
//! | POST | `/api/orders/{order_id}/authorize` | Authorize order |
//! | POST | `/api/orders/{authorization_id}/captureAuthorize` | Capture authorization |
//! | POST | `/api/payments/refund` | Refund captured payment |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
