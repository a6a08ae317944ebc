//! # Routes
//!
//! Axum router configuration for the relay API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /test - Liveness check
/// - POST /orders - Create order from cart
/// - POST /orders/{order_id}/capture - Capture approved order
/// - GET  / - Checkout page (`INDEX_FILE`)
/// - GET  /* - Static assets (`STATIC_DIR`)
///
/// The order routes are also mounted under `/api`, which is where the
/// storefront's checkout script posts.
pub fn create_router(state: AppState) -> Router {
    // The storefront may be served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let order_routes = Router::new()
        .route("/orders", post(handlers::create_order))
        .route("/orders/{order_id}/capture", post(handlers::capture_order));

    let index = ServeFile::new(&state.config.index_file);
    let assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/test", get(handlers::health))
        .merge(order_routes.clone())
        .nest("/api", order_routes)
        // Storefront
        .route_service("/", index)
        .fallback_service(assets)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
