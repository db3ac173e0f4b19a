//! UrlRecord entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shortened URL mapping with metadata.
///
/// The alias and target URL are immutable once created; only `active` may be
/// toggled by administrative tooling. Records are serializable because the
/// resolution cache stores them whole, as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub long_url: String,
    pub created_by_ip: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub active: bool,
    pub custom_alias: bool,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        alias: String,
        long_url: String,
        created_by_ip: Option<String>,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
        active: bool,
        custom_alias: bool,
    ) -> Self {
        Self {
            id,
            alias,
            long_url,
            created_by_ip,
            created_at,
            expires_at,
            active,
            custom_alias,
        }
    }

    /// Returns true if the expiry time lies strictly in the past.
    ///
    /// A record whose `expires_at` equals the current instant is still alive;
    /// `None` means the record never expires on its own.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| e < Utc::now())
    }
}

/// Input data for creating a new mapping.
///
/// `id`, `created_at` and `active` are assigned by the store at save time.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub alias: String,
    pub long_url: String,
    pub created_by_ip: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub custom_alias: bool,
}
