//! # PayPal Orders & Payments Gateway
//!
//! Implementation of the five relay operations against the PayPal REST API:
//! order creation, capture, authorization, authorization-capture, and refund.
//! Each operation makes exactly one outbound call and relays the vendor's
//! status and JSON body.

use crate::auth::TokenCache;
use crate::config::PayPalConfig;
use async_trait::async_trait;
use checkout_core::{
    CheckoutError, CheckoutResult, GatewayResponse, OrderTemplate, PaymentGateway,
};
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

const PREFER_REPRESENTATION: &str = "return=representation";
const PREFER_MINIMAL: &str = "return=minimal";

/// PayPal payment gateway
///
/// Holds the immutable configuration, a pooled HTTP client, and the access
/// token cache. Constructed once at startup and shared across requests.
pub struct PayPalGateway {
    config: PayPalConfig,
    client: Client,
    tokens: TokenCache,
}

impl PayPalGateway {
    /// Create a new gateway from an explicit configuration
    pub fn new(config: PayPalConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            tokens: TokenCache::new(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> CheckoutResult<Self> {
        let config = PayPalConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Shared request plumbing: bearer token, representation preference, and
    /// the merchant-context headers when a merchant is configured.
    async fn post(
        &self,
        path: &str,
        prefer: &'static str,
        body: &serde_json::Value,
        request_id: Option<String>,
    ) -> CheckoutResult<GatewayResponse> {
        let access_token = self.tokens.access_token(&self.client, &self.config).await?;
        let url = format!("{}{}", self.config.api_base_url, path);

        let mut request = self
            .client
            .post(&url)
            .bearer_auth(access_token)
            .header("Prefer", prefer)
            .json(body);

        if let Some(id) = request_id {
            request = request.header("PayPal-Request-Id", id);
        }
        if let Some(assertion) = self.config.auth_assertion() {
            request = request.header("PayPal-Auth-Assertion", assertion);
        }
        if let Some(ref bn_code) = self.config.bn_code {
            request = request.header("PayPal-Partner-Attribution-Id", bn_code);
        }

        self.execute(request).await
    }

    async fn execute(&self, request: RequestBuilder) -> CheckoutResult<GatewayResponse> {
        let response = request
            .send()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("PayPal API error: status={}, body={}", status, body);
            return Err(provider_error(status.as_u16(), &body));
        }

        let json = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&body).map_err(|e| {
                CheckoutError::Serialization(format!("Failed to parse PayPal response: {}", e))
            })?
        };

        Ok(GatewayResponse::new(status.as_u16(), json))
    }
}

#[async_trait]
impl PaymentGateway for PayPalGateway {
    #[instrument(skip(self, template), fields(template_id = %template.id))]
    async fn create_order(&self, template: &OrderTemplate) -> CheckoutResult<GatewayResponse> {
        let request = template.to_order_request(self.config.seller_payer_id.as_deref());
        if request.is_empty() {
            return Err(CheckoutError::InvalidRequest(
                "Order has no purchase units".to_string(),
            ));
        }

        let body = serde_json::to_value(&request)
            .map_err(|e| CheckoutError::Serialization(e.to_string()))?;

        debug!(
            "Creating order: intent={}, units={}",
            request.intent.as_str(),
            request.purchase_units.len()
        );

        let response = self
            .post(
                "/v2/checkout/orders",
                PREFER_REPRESENTATION,
                &body,
                Some(Uuid::new_v4().to_string()),
            )
            .await?;

        info!(
            "Created order: id={}",
            response
                .body
                .get("id")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown")
        );

        Ok(response)
    }

    #[instrument(skip(self))]
    async fn capture_order(&self, order_id: &str) -> CheckoutResult<GatewayResponse> {
        let path = format!("/v2/checkout/orders/{order_id}/capture");
        self.post(&path, PREFER_REPRESENTATION, &serde_json::json!({}), None)
            .await
    }

    #[instrument(skip(self))]
    async fn authorize_order(&self, order_id: &str) -> CheckoutResult<GatewayResponse> {
        let path = format!("/v2/checkout/orders/{order_id}/authorize");
        self.post(&path, PREFER_MINIMAL, &serde_json::json!({}), None)
            .await
    }

    #[instrument(skip(self))]
    async fn capture_authorization(
        &self,
        authorization_id: &str,
    ) -> CheckoutResult<GatewayResponse> {
        let path = format!("/v2/payments/authorizations/{authorization_id}/capture");
        let body = serde_json::to_value(CaptureAuthorizationRequest {
            final_capture: false,
        })
        .map_err(|e| CheckoutError::Serialization(e.to_string()))?;

        self.post(&path, PREFER_MINIMAL, &body, None).await
    }

    #[instrument(skip(self))]
    async fn refund_capture(&self, capture_id: &str) -> CheckoutResult<GatewayResponse> {
        let path = format!("/v2/payments/captures/{capture_id}/refund");
        self.post(&path, PREFER_MINIMAL, &serde_json::json!({}), None)
            .await
    }

    fn provider_name(&self) -> &'static str {
        "paypal"
    }
}

// =============================================================================
// Vendor wire types
// =============================================================================

/// Body for capturing an authorization; the hold stays open for further
/// captures
#[derive(Debug, Serialize)]
struct CaptureAuthorizationRequest {
    final_capture: bool,
}

#[derive(Debug, Deserialize)]
struct PayPalErrorBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

fn provider_error(status: u16, body: &str) -> CheckoutError {
    let message = serde_json::from_str::<PayPalErrorBody>(body)
        .ok()
        .and_then(|e| match (e.name, e.message, e.error, e.error_description) {
            (Some(name), Some(message), _, _) => Some(format!("{name}: {message}")),
            (_, Some(message), _, _) => Some(message),
            (_, _, Some(error), Some(description)) => Some(format!("{error}: {description}")),
            (_, _, Some(error), None) => Some(error),
            _ => None,
        })
        .unwrap_or_else(|| body.to_string());

    CheckoutError::Provider {
        provider: "paypal".to_string(),
        status,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{
        body_json, body_partial_json, header, header_exists, method, path,
    };
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_token_endpoint(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "A21AAF-test-token",
                "token_type": "Bearer",
                "expires_in": 32400
            })))
            .mount(server)
            .await;
    }

    fn gateway_for(server: &MockServer) -> PayPalGateway {
        PayPalGateway::new(
            PayPalConfig::new("client-abc", "secret-xyz").with_api_base_url(server.uri()),
        )
    }

    fn merchant_gateway_for(server: &MockServer) -> PayPalGateway {
        PayPalGateway::new(
            PayPalConfig::new("client-abc", "secret-xyz")
                .with_seller_payer_id("SELLER123")
                .with_bn_code("BN-CODE-1")
                .with_api_base_url(server.uri()),
        )
    }

    #[tokio::test]
    async fn test_create_order_posts_template_payload() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;

        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders"))
            .and(header("Prefer", "return=representation"))
            .and(header("Authorization", "Bearer A21AAF-test-token"))
            .and(header_exists("PayPal-Request-Id"))
            .and(body_partial_json(json!({"intent": "CAPTURE"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "5O190127TN364715T",
                "status": "CREATED"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = gateway_for(&server)
            .create_order(&OrderTemplate::standard())
            .await
            .unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(response.body["id"], "5O190127TN364715T");
    }

    #[tokio::test]
    async fn test_merchant_headers_attached_when_configured() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;

        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders/5O190127TN364715T/capture"))
            .and(header_exists("PayPal-Auth-Assertion"))
            .and(header("PayPal-Partner-Attribution-Id", "BN-CODE-1"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "5O190127TN364715T",
                "status": "COMPLETED"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = merchant_gateway_for(&server)
            .capture_order("5O190127TN364715T")
            .await
            .unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(response.body["status"], "COMPLETED");
    }

    #[tokio::test]
    async fn test_assertion_absent_when_toggled_off() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;

        // Mounted first: consumes the request if the header sneaks through
        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders/5O190127TN364715T/authorize"))
            .and(header_exists("PayPal-Auth-Assertion"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders/5O190127TN364715T/authorize"))
            .and(header("Prefer", "return=minimal"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "5O190127TN364715T",
                "status": "COMPLETED"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = PayPalGateway::new(
            PayPalConfig::new("client-abc", "secret-xyz")
                .with_seller_payer_id("SELLER123")
                .with_auth_assertion(false)
                .with_api_base_url(server.uri()),
        );

        gateway.authorize_order("5O190127TN364715T").await.unwrap();
    }

    #[tokio::test]
    async fn test_capture_authorization_is_non_final() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;

        Mock::given(method("POST"))
            .and(path("/v2/payments/authorizations/0VF52814937998046/capture"))
            .and(header("Prefer", "return=minimal"))
            .and(body_json(json!({"final_capture": false})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "2GG279541U471931P",
                "status": "COMPLETED"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = gateway_for(&server)
            .capture_authorization("0VF52814937998046")
            .await
            .unwrap();

        assert_eq!(response.body["id"], "2GG279541U471931P");
    }

    #[tokio::test]
    async fn test_refund_hits_captures_endpoint() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;

        Mock::given(method("POST"))
            .and(path("/v2/payments/captures/3C679366HH908993F/refund"))
            .and(header("Prefer", "return=minimal"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "1JU08902781691411",
                "status": "COMPLETED"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = gateway_for(&server)
            .refund_capture("3C679366HH908993F")
            .await
            .unwrap();

        assert_eq!(response.status, 201);
    }

    #[tokio::test]
    async fn test_vendor_rejection_surfaces_as_provider_error() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;

        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders/BOGUS/capture"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "name": "RESOURCE_NOT_FOUND",
                "message": "The specified resource does not exist."
            })))
            .mount(&server)
            .await;

        let err = gateway_for(&server)
            .capture_order("BOGUS")
            .await
            .unwrap_err();

        match err {
            CheckoutError::Provider {
                provider,
                status,
                message,
            } => {
                assert_eq!(provider, "paypal");
                assert_eq!(status, 404);
                assert!(message.contains("RESOURCE_NOT_FOUND"));
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_access_token_reused_across_operations() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "A21AAF-test-token",
                "token_type": "Bearer",
                "expires_in": 32400
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders/ORDER1/capture"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "ORDER1"})))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/v2/payments/captures/CAP1/refund"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "REF1"})))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        gateway.capture_order("ORDER1").await.unwrap();
        gateway.refund_capture("CAP1").await.unwrap();
    }

    #[test]
    fn test_provider_error_message_shapes() {
        let err = provider_error(
            422,
            r#"{"name":"UNPROCESSABLE_ENTITY","message":"The requested action could not be performed."}"#,
        );
        assert!(err
            .to_string()
            .contains("UNPROCESSABLE_ENTITY: The requested action could not be performed."));

        let oauth_err = provider_error(
            401,
            r#"{"error":"invalid_client","error_description":"Client Authentication failed"}"#,
        );
        assert!(oauth_err.to_string().contains("invalid_client"));

        let opaque = provider_error(500, "upstream exploded");
        assert!(opaque.to_string().contains("upstream exploded"));
    }
}
