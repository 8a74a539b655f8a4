//! Link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Path, response::IntoResponse};

/// Template for the link statistics page.
///
/// Renders `templates/stats.html` with:
/// - Destination URL and short URL
/// - Click count and last-clicked time
/// - Delete action
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub code: String,
}

/// Renders the statistics page for a specific link.
///
/// # Endpoint
///
/// `GET /code/{code}`
///
/// # Template
///
/// Uses `templates/stats.html` for server-side rendering.
/// The page fetches link details via JavaScript from `/api/links/{code}`.
pub async fn stats_handler(Path(code): Path<String>) -> impl IntoResponse {
    StatsTemplate { code }
}
