//! Handler for the liveness endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service liveness.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// # Response
///
/// ```json
/// {
///   "ok": true,
///   "version": "0.1.0",
///   "uptime": 42,
///   "timestamp": "2025-01-01T00:00:00Z"
/// }
/// ```
///
/// Always 200; a process that can answer is considered live. Database
/// connectivity surfaces through the API endpoints themselves.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.started_at.elapsed().as_secs(),
        timestamp: Utc::now(),
    })
}
