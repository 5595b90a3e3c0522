//! DTO for the short code lookup endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Stored details of a short code.
#[derive(Debug, Serialize)]
pub struct UrlInfoResponse {
    pub id: i64,
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}
