//! # Application State
//!
//! Shared state for the Axum application: the payment gateway, the selected
//! order template, and server configuration. Everything is constructed once
//! at startup and injected into handlers through axum state.

use checkout_core::{BoxedPaymentGateway, OrderTemplate, TemplateCatalog};
use checkout_paypal::PayPalGateway;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Id of the order template used for order creation
    pub order_template: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            order_template: std::env::var("ORDER_TEMPLATE")
                .unwrap_or_else(|_| "standard".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The payment gateway behind all five operations
    pub gateway: BoxedPaymentGateway,
    /// Order template used for creation
    pub template: OrderTemplate,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState with the PayPal gateway
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let catalog = load_template_catalog()?;
        catalog
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid order template catalog: {}", e))?;

        let template = catalog
            .get(&config.order_template)
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!("Order template not found: {}", config.order_template)
            })?;

        let gateway = PayPalGateway::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize PayPal: {}", e))?;

        Ok(Self {
            gateway: Arc::new(gateway),
            template,
            config,
        })
    }

    /// Create an AppState with an explicit gateway (tests, alternate vendors)
    pub fn with_gateway(
        gateway: BoxedPaymentGateway,
        template: OrderTemplate,
        config: AppConfig,
    ) -> Self {
        Self {
            gateway,
            template,
            config,
        }
    }
}

/// Load the order-template catalog from the config file
fn load_template_catalog() -> anyhow::Result<TemplateCatalog> {
    let config_paths = [
        "config/order_template.toml",
        "../config/order_template.toml",
        "../../config/order_template.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let catalog = TemplateCatalog::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!(
                "Loaded {} order templates from {}",
                catalog.templates.len(),
                path
            );
            return Ok(catalog);
        }
    }

    tracing::warn!("No template catalog found, using the built-in standard template");
    Ok(TemplateCatalog::builtin())
}
