//! # Routes
//!
//! Axum router configuration for the checkout relay.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /                                            - Liveness message
/// - POST /api/orders                                  - Create order
/// - POST /api/orders/{order_id}/capture               - Capture order
/// - POST /api/orders/{order_id}/authorize             - Authorize order
/// - POST /api/orders/{authorization_id}/captureAuthorize - Capture authorization
/// - POST /api/payments/refund                         - Refund captured payment
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - the sample storefront is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Orders
        .route("/orders", post(handlers::create_order))
        .route("/orders/{order_id}/capture", post(handlers::capture_order))
        .route(
            "/orders/{order_id}/authorize",
            post(handlers::authorize_order),
        )
        .route(
            "/orders/{authorization_id}/captureAuthorize",
            post(handlers::capture_authorization),
        )
        // Payments
        .route("/payments/refund", post(handlers::refund_payment));

    Router::new()
        // Liveness at root
        .route("/", get(handlers::root))
        // API
        .nest("/api", api_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
