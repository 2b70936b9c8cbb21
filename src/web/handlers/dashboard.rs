//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the live dashboard page.
///
/// Renders `templates/dashboard.html`: the three counters, a connection
/// indicator, and a manual refresh button. The page joins the dashboard
/// group over `/ws` and falls back to polling `/api/stats` while offline.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {}

/// Renders the dashboard page.
///
/// # Endpoint
///
/// `GET /dashboard`
pub async fn dashboard_handler() -> impl IntoResponse {
    DashboardTemplate {}
}
