//! DTOs for the links API.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::Link;

/// Compiled regex for custom code validation.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{6,8}$").unwrap());

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    /// The destination URL (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional custom short code.
    #[validate(regex(
        path = "*CODE_REGEX",
        message = "Code must be 6-8 alphanumeric characters"
    ))]
    pub custom_code: Option<String>,
}

/// Response for a successfully created link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub code: String,
    pub url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

/// A full link with its click statistics.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked_at: Option<DateTime<Utc>>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            url: link.url,
            clicks: link.clicks,
            created_at: link.created_at,
            last_clicked_at: link.last_clicked_at,
        }
    }
}

/// Response containing all links.
#[derive(Debug, Serialize)]
pub struct LinksResponse {
    pub links: Vec<LinkResponse>,
}

/// Generic confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_accepts_valid_input() {
        let request = CreateLinkRequest {
            url: "https://example.com".to_string(),
            custom_code: Some("abc123".to_string()),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_accepts_missing_custom_code() {
        let request = CreateLinkRequest {
            url: "https://example.com".to_string(),
            custom_code: None,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_bad_url() {
        let request = CreateLinkRequest {
            url: "not-a-url".to_string(),
            custom_code: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_bad_code() {
        let request = CreateLinkRequest {
            url: "https://example.com".to_string(),
            custom_code: Some("ab".to_string()),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_link_response_camel_case_fields() {
        let response = LinkResponse {
            code: "abc123".to_string(),
            url: "https://example.com".to_string(),
            clicks: 2,
            created_at: Utc::now(),
            last_clicked_at: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("lastClickedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
