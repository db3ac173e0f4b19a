//! Resolution cache trait and error types.

use async_trait::async_trait;

use crate::domain::entities::UrlRecord;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching alias resolutions in front of the durable store.
///
/// Implementations must be thread-safe and handle backend errors gracefully
/// without disrupting the application (cache failures degrade to store
/// lookups). Store misses are not cached; a freshly created alias only needs
/// the explicit [`invalidate`](CacheService::invalidate) performed after its
/// save to be visible to the next read.
///
/// [`RedisCache`](crate::infrastructure::cache::RedisCache) backs this with
/// Redis and a TTL; [`MemoryCache`](crate::infrastructure::cache::MemoryCache)
/// is the in-process fallback.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the cached record for an alias.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` on cache hit
    /// - `Ok(None)` on cache miss, or on a backend error in fail-open
    ///   implementations
    async fn get_record(&self, alias: &str) -> CacheResult<Option<UrlRecord>>;

    /// Stores a record in the cache under its alias.
    ///
    /// # Errors
    ///
    /// Implementations should log backend errors and return `Ok(())` so a
    /// degraded cache never disrupts the request flow.
    async fn put_record(&self, record: &UrlRecord) -> CacheResult<()>;

    /// Removes the cached entry for an alias.
    ///
    /// Called after a successful save so the next read observes the fresh
    /// record.
    async fn invalidate(&self, alias: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by health check endpoints to report cache status.
    async fn health_check(&self) -> bool;
}
