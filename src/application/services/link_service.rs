//! Link creation, lookup, deletion, and redirect orchestration.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_url;
use serde_json::json;

/// Attempts before giving up on finding an unclaimed generated code.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for creating, retrieving, deleting, and resolving short links.
///
/// Uniqueness is enforced by the database: creation inserts directly and
/// reacts to a unique-constraint conflict, so two concurrent requests for
/// the same code cannot both succeed.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `url` - The destination URL (must be absolute HTTP/HTTPS)
    /// - `custom_code` - Optional custom short code (validated if provided)
    ///
    /// # Code Generation
    ///
    /// Without a custom code, a random 6-8 character code is generated;
    /// on a collision the insert is retried with a fresh code, up to
    /// [`MAX_GENERATION_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom code is invalid.
    /// Returns [`AppError::Conflict`] if the custom code is already taken.
    pub async fn create_link(
        &self,
        url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_url(&url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        match custom_code {
            Some(custom) => {
                validate_custom_code(&custom)?;

                self.repository
                    .insert(NewLink {
                        code: custom.clone(),
                        url,
                    })
                    .await
                    .map_err(|e| match e {
                        AppError::Conflict { .. } => AppError::conflict(
                            format!("Short code '{custom}' already exists"),
                            json!({ "code": custom }),
                        ),
                        other => other,
                    })
            }
            None => self.insert_with_generated_code(url).await,
        }
    }

    /// Retrieves a link by its short code, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))
    }

    /// Lists all links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list().await
    }

    /// Deletes a link by its short code, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if self.repository.delete(code).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Link not found",
                json!({ "code": code }),
            ))
        }
    }

    /// Resolves a code to its destination URL, counting the click.
    ///
    /// The increment of `clicks` and the stamp of `last_clicked_at` happen
    /// in the same statement that fetches the URL, so a successful redirect
    /// is always counted exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn resolve_and_count(&self, code: &str) -> Result<String, AppError> {
        self.repository
            .record_click(code)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))
    }

    /// Inserts with a freshly generated code, retrying on collision.
    async fn insert_with_generated_code(&self, url: String) -> Result<Link, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code();

            match self
                .repository
                .insert(NewLink {
                    code,
                    url: url.clone(),
                })
                .await
            {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique code",
            json!({ "reason": "too many collisions" }),
        ))
    }
}
