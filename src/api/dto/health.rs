//! DTO for the liveness endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: String,
    /// Seconds since process start.
    pub uptime: u64,
    pub timestamp: DateTime<Utc>,
}
