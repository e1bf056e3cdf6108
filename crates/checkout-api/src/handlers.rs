//! # Request Handlers
//!
//! Axum request handlers for the checkout relay. Each handler forwards one
//! operation to the payment gateway and returns the vendor's status and
//! JSON body unchanged.

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use checkout_core::{CheckoutError, GatewayResponse, PaymentGateway as _};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create order request.
///
/// The cart is accepted for front-end compatibility but does not influence
/// the charge: amounts come from the configured order template.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub cart: Option<serde_json::Value>,
}

/// Refund request body
#[derive(Debug, Deserialize)]
pub struct RefundRequest {
    /// Id of the capture to refund
    #[serde(rename = "capturedPaymentId")]
    pub captured_payment_id: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

type RelayResult = Result<(StatusCode, Json<serde_json::Value>), (StatusCode, Json<ErrorResponse>)>;

fn checkout_error_to_response(err: CheckoutError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

/// Relay the vendor response: its status code and JSON body, untouched
fn relay(response: GatewayResponse) -> (StatusCode, Json<serde_json::Value>) {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK);
    (status, Json(response.body))
}

// =============================================================================
// Handlers
// =============================================================================

/// Liveness endpoint
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Server is running" }))
}

/// Create an order to start the transaction
#[instrument(skip(state, request))]
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> RelayResult {
    if request.cart.is_some() {
        debug!(
            "Cart payload received; charged amounts come from template {:?}",
            state.template.id
        );
    }

    let response = state
        .gateway
        .create_order(&state.template)
        .await
        .map_err(|e| {
            error!("Failed to create order: {}", e);
            checkout_error_to_response(e)
        })?;

    Ok(relay(response))
}

/// Capture payment for an approved order
#[instrument(skip(state), fields(order_id = %order_id))]
pub async fn capture_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> RelayResult {
    let response = state
        .gateway
        .capture_order(&order_id)
        .await
        .map_err(|e| {
            error!("Failed to capture order: {}", e);
            checkout_error_to_response(e)
        })?;

    Ok(relay(response))
}

/// Place an authorization hold on an approved order
#[instrument(skip(state), fields(order_id = %order_id))]
pub async fn authorize_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> RelayResult {
    let response = state
        .gateway
        .authorize_order(&order_id)
        .await
        .map_err(|e| {
            error!("Failed to authorize order: {}", e);
            checkout_error_to_response(e)
        })?;

    Ok(relay(response))
}

/// Capture an authorization, by id
#[instrument(skip(state), fields(authorization_id = %authorization_id))]
pub async fn capture_authorization(
    State(state): State<AppState>,
    Path(authorization_id): Path<String>,
) -> RelayResult {
    let response = state
        .gateway
        .capture_authorization(&authorization_id)
        .await
        .map_err(|e| {
            error!("Failed to capture authorization: {}", e);
            checkout_error_to_response(e)
        })?;

    Ok(relay(response))
}

/// Refund a captured payment
#[instrument(skip(state, request))]
pub async fn refund_payment(
    State(state): State<AppState>,
    Json(request): Json<RefundRequest>,
) -> RelayResult {
    if request.captured_payment_id.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("capturedPaymentId must not be empty", 400)),
        ));
    }

    let response = state
        .gateway
        .refund_capture(&request.captured_payment_id)
        .await
        .map_err(|e| {
            error!("Failed to refund captured payment: {}", e);
            checkout_error_to_response(e)
        })?;

    Ok(relay(response))
}
