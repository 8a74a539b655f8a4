use std::sync::Arc;
use std::time::Instant;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::PgLinkRepository;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    /// Public base URL prepended to codes when building short URLs.
    pub base_url: String,
    /// Process start time, reported as uptime by the health endpoint.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<PgLinkRepository>>, base_url: String) -> Self {
        Self {
            link_service,
            base_url,
            started_at: Instant::now(),
        }
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
