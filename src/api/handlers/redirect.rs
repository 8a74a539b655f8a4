//! Handler for short URL redirect.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;

/// Template for the 404 page shown for unknown codes.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {}

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Behavior
///
/// A single atomic statement increments `clicks`, stamps `last_clicked_at`,
/// and fetches the destination. The code is matched case-insensitively,
/// consistent with the rest of the API.
///
/// # Responses
///
/// - **302 Found** with `Location` on match
/// - **404** styled HTML page for unknown codes, with no side effects
/// - **500** plain text on database errors
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.link_service.resolve_and_count(&code).await {
        Ok(url) => (StatusCode::FOUND, [(header::LOCATION, url)]).into_response(),
        Err(AppError::NotFound { .. }) => {
            (StatusCode::NOT_FOUND, NotFoundTemplate {}).into_response()
        }
        Err(e) => {
            error!(code = %code, error = %e, "redirect failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
