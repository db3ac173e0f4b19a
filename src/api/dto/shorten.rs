//! Request and response bodies for the shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// Custom alias shape rules (length, alphabet, reserved names) are enforced
/// by the service, which also treats a blank alias as absent.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// Destination URL, at most 2048 characters.
    #[validate(url(message = "Invalid URL format"))]
    #[validate(length(max = 2048, message = "URL exceeds maximum length"))]
    pub long_url: String,

    /// Optional custom alias instead of a generated one.
    pub custom_alias: Option<String>,

    /// Optional expiry timestamp. After this time, the link returns 410 Gone.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Response for a successfully shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub alias: String,
    pub long_url: String,
}
