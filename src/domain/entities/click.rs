//! Click events captured on successful redirects.

use chrono::{DateTime, Utc};

/// One recorded access of a short URL.
///
/// Append-only analytics data: an event references its mapping by alias and
/// is never updated after insertion.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub alias: String,
    pub clicked_at: DateTime<Utc>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl Click {
    /// Materializes a stored event from its write unit.
    ///
    /// `id` and `clicked_at` come from the store; in Postgres both are
    /// filled by column defaults.
    pub fn record(id: i64, clicked_at: DateTime<Utc>, new: NewClick) -> Self {
        Self {
            id,
            alias: new.alias,
            clicked_at,
            ip: new.ip,
            user_agent: new.user_agent,
        }
    }
}

/// Write unit for one click.
///
/// The client fields stay optional because proxies and privacy tooling
/// routinely strip them.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub alias: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}
