//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{dashboard_handler, landing_handler};
use axum::{Router, routing::get};

/// Browser-facing page routes, all public.
///
/// # Endpoints
///
/// - `GET /`          - Landing page with the two tracked links
/// - `GET /dashboard` - Live dashboard view
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_handler))
        .route("/dashboard", get(dashboard_handler))
}
