//! API route configuration.

use crate::api::handlers::{stats_handler, track_click_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All REST API routes.
///
/// # Endpoints
///
/// - `POST /track-click` - Record one outbound click (JSON or form body)
/// - `GET  /stats`       - Aggregate click counts per destination
///
/// Both endpoints are public; the dashboard group carries no authentication.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/track-click", post(track_click_handler))
        .route("/stats", get(stats_handler))
}
