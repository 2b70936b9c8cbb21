//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::destination::Destination;
use crate::state::AppState;

/// Template for the landing page.
///
/// Renders `templates/landing.html` with the two tracked destination links.
/// The links submit as plain forms, so tracking (and the server-side
/// redirect) works without JavaScript.
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub amazon_url: String,
    pub walmart_url: String,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn landing_handler(State(state): State<AppState>) -> LandingTemplate {
    LandingTemplate {
        amazon_url: state.allow_list.url_for(Destination::Amazon).to_string(),
        walmart_url: state.allow_list.url_for(Destination::Walmart).to_string(),
    }
}
