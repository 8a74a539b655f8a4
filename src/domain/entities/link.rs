//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its click statistics.
///
/// The short code is stored case-sensitively but compared case-insensitively
/// on lookup, delete, and redirect. `clicks` only ever grows; `last_clicked_at`
/// is `None` until the first successful redirect.
#[derive(Debug, Clone)]
pub struct Link {
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        url: String,
        clicks: i64,
        created_at: DateTime<Utc>,
        last_clicked_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            code,
            url,
            clicks,
            created_at,
            last_clicked_at,
        }
    }

    /// Returns true if the link has been followed at least once.
    pub fn was_clicked(&self) -> bool {
        self.last_clicked_at.is_some()
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub url: String,
}
