//! # Payment Gateway Trait
//!
//! The seam behind which the remote payment service sits. The relay never
//! interprets vendor responses beyond status classification; bodies are
//! carried through verbatim for the HTTP layer to return.

use crate::error::CheckoutResult;
use crate::template::OrderTemplate;
use async_trait::async_trait;
use std::sync::Arc;

/// A vendor response carried through the relay untouched
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    /// Vendor HTTP status code
    pub status: u16,
    /// Vendor JSON body, relayed verbatim
    pub body: serde_json::Value,
}

impl GatewayResponse {
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// True for 2xx vendor responses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Core trait for payment provider implementations.
///
/// Each operation performs exactly one outbound call and returns the
/// vendor's response. All business failures (invalid ids, declined funds)
/// originate at the vendor and surface as errors.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order from an order template.
    async fn create_order(&self, template: &OrderTemplate) -> CheckoutResult<GatewayResponse>;

    /// Capture payment for an approved order.
    async fn capture_order(&self, order_id: &str) -> CheckoutResult<GatewayResponse>;

    /// Place an authorization hold on an approved order.
    async fn authorize_order(&self, order_id: &str) -> CheckoutResult<GatewayResponse>;

    /// Capture a previously created authorization, by id.
    async fn capture_authorization(
        &self,
        authorization_id: &str,
    ) -> CheckoutResult<GatewayResponse>;

    /// Refund a captured payment, by capture id.
    async fn refund_capture(&self, capture_id: &str) -> CheckoutResult<GatewayResponse>;

    /// Get the provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success_classification() {
        let ok = GatewayResponse::new(201, serde_json::json!({"id": "5O190127TN364715T"}));
        assert!(ok.is_success());

        let rejected = GatewayResponse::new(422, serde_json::json!({"name": "UNPROCESSABLE_ENTITY"}));
        assert!(!rejected.is_success());
    }
}
