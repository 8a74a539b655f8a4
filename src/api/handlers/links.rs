//! Handlers for the links CRUD endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{
    CreateLinkRequest, CreateLinkResponse, LinkResponse, LinksResponse, MessageResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "customCode": "mylink1" }
/// ```
///
/// `customCode` is optional; without it a random 6-8 character code is
/// generated.
///
/// # Response
///
/// `201 Created` with:
///
/// ```json
/// {
///   "code": "x7k9p2",
///   "url": "https://example.com",
///   "shortUrl": "https://sho.rt/x7k9p2",
///   "createdAt": "2025-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 for an invalid URL or code shape, 409 if the custom code is
/// already taken.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.url, payload.custom_code)
        .await?;

    let response = CreateLinkResponse {
        short_url: state.short_url(&link.code),
        code: link.code,
        url: link.url,
        created_at: link.created_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Lists all links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// Pagination and search happen client-side; the full set is returned.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<LinksResponse>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(LinksResponse {
        links: links.into_iter().map(Into::into).collect(),
    }))
}

/// Fetches a single link with its click statistics.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// The code is matched case-insensitively.
///
/// # Errors
///
/// Returns 404 if the code is unknown.
pub async fn get_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(link.into()))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// The code is matched case-insensitively.
///
/// # Errors
///
/// Returns 404 if the code is unknown.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(Json(MessageResponse {
        message: "Link deleted successfully".to_string(),
    }))
}
