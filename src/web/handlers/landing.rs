//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the landing page.
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingTemplate {}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn landing_handler() -> impl IntoResponse {
    LandingTemplate {}
}
