//! Top-level router configuration combining API, WebSocket, and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Landing page with the two tracked links
//! - `GET  /dashboard`   - Live dashboard view
//! - `GET  /health`      - Health check: store, broadcast channel
//! - `GET  /ws`          - Dashboard WebSocket feed
//! - `/api/*`            - REST API (track-click, stats)
//! - anything else       - `404` JSON body
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, ws_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::error::AppError;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::api_routes().layer(rate_limit::layer());

    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/ws", get(ws_handler))
        .nest("/api", api_router)
        .merge(web::routes::routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// JSON 404 for unknown routes.
async fn fallback_handler() -> AppError {
    AppError::not_found("Route Not Found", json!({}))
}
