//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html` with:
/// - Link creation form
/// - Searchable, paginated link table
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {}

/// Renders the dashboard page.
///
/// # Endpoint
///
/// `GET /dashboard`
///
/// # Template
///
/// Uses `templates/dashboard.html` for server-side rendering.
/// The page fetches its data via JavaScript from `/api/links`.
pub async fn dashboard_handler() -> impl IntoResponse {
    DashboardTemplate {}
}
