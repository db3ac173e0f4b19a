//! Repository trait for durable alias storage.

use crate::domain::entities::{NewClick, NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable mapping from alias to URL record, plus the append-only click log.
///
/// The store is the authority on alias uniqueness: `exists` followed by
/// `save` is not atomic, so two creators racing on the same alias may both
/// pass the existence check and the store must reject the second `save`
/// with a conflict.
///
/// Every method except `ping` surfaces backend failures as
/// [`AppError::Internal`].
/// [`PgAliasStore`](crate::infrastructure::persistence::PgAliasStore) is the
/// PostgreSQL implementation; tests mock the trait directly.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasStore: Send + Sync {
    /// Returns true if a record exists under `alias`.
    async fn exists(&self, alias: &str) -> Result<bool, AppError>;

    /// Finds a record by its alias; `Ok(None)` when nothing is stored.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Persists a new mapping and returns it with store-assigned fields
    /// (`id`, `created_at`, `active`) filled in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias is already taken, whether
    /// the caller pre-checked or not.
    async fn save(&self, record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Appends one click event to the log.
    async fn append_click(&self, click: NewClick) -> Result<(), AppError>;

    /// Counts recorded clicks for `alias`.
    async fn count_clicks(&self, alias: &str) -> Result<i64, AppError>;

    /// Probes store connectivity, for health reporting.
    async fn ping(&self) -> bool;
}
