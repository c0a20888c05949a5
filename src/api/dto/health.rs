//! DTO for the health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Service health snapshot.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    /// Number of authentication sessions currently registered.
    pub active_sessions: usize,
}
