//! # PayPal Checkout RS
//!
//! Thin relay between a storefront and the PayPal REST API.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export PAYPAL_CLIENT_ID=...
//! export PAYPAL_CLIENT_SECRET=...
//! export PAYPAL_SELLER_PAYER_ID=...   # optional, multiparty flows
//! export PAYPAL_BN_CODE=...           # optional, partner attribution
//!
//! # Run the server
//! paypal-checkout
//! ```

use checkout_api::{routes, state::AppState};
use checkout_core::PaymentGateway as _;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Order template: {}", state.template.id);
    info!("Payment provider: {}", state.gateway.provider_name());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 PayPal checkout relay starting on http://{}", addr);

    if !is_prod {
        info!("💳 Create order: POST http://{}/api/orders", addr);
        info!("💸 Refund: POST http://{}/api/payments/refund", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  💳 PayPal Checkout RS 💳
  ━━━━━━━━━━━━━━━━━━━━━━━━
  Order/capture/refund relay
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
