//! Shared counter store trait and error types.

use std::time::Duration;

use async_trait::async_trait;

/// Errors that can occur during counter operations.
///
/// Unlike the resolution cache, counter stores report failures honestly:
/// the admission policy that reacts to an unreachable store (fail-open)
/// belongs to the caller, not to this layer.
#[derive(Debug, thiserror::Error)]
pub enum CounterError {
    #[error("Counter store connection error: {0}")]
    ConnectionError(String),

    #[error("Counter store operation error: {0}")]
    OperationError(String),
}

/// Windowed request counters shared across service instances.
///
/// Keys are client identities; values are non-negative counts with an
/// optional expiry. An expired or absent key reads as absent, which callers
/// treat as a count of zero.
///
/// [`RedisCounterStore`](crate::infrastructure::counter::RedisCounterStore)
/// shares one set of counters across instances;
/// [`MemoryCounterStore`](crate::infrastructure::counter::MemoryCounterStore)
/// counts per process.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Reads the live count for `key`, `None` if absent or expired.
    async fn get(&self, key: &str) -> Result<Option<u64>, CounterError>;

    /// Atomically increments the count for `key` and returns the
    /// post-increment value. Creates the key at 1 if absent.
    async fn increment(&self, key: &str) -> Result<u64, CounterError>;

    /// Sets the remaining lifetime of `key`. No-op if the key is absent.
    async fn expire(&self, key: &str, ttl: Duration) -> Result<(), CounterError>;

    /// Checks if the counter backend is healthy.
    async fn health_check(&self) -> bool;
}
