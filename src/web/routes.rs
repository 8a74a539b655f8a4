//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{dashboard_handler, landing_handler, stats_handler};
use axum::{Router, routing::get};

/// Browser-facing pages.
///
/// # Endpoints
///
/// - `GET /`             - Landing page
/// - `GET /dashboard`    - Dashboard: create form + searchable link table
/// - `GET /code/{code}`  - Per-link statistics page
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/code/{code}", get(stats_handler))
}
