//! DTOs for alias metadata and click analytics.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Metadata for a short URL, reported regardless of redirect validity.
#[derive(Debug, Serialize)]
pub struct AliasInfoResponse {
    pub alias: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub clicks: i64,
    pub custom: bool,
}

/// Aggregated click count for a short URL.
#[derive(Debug, Serialize)]
pub struct ClickCountResponse {
    pub alias: String,
    pub total_clicks: i64,
}
