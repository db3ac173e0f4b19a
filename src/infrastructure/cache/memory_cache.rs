//! In-process resolution cache.

use super::service::{CacheResult, CacheService};
use crate::domain::entities::UrlRecord;
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

/// In-memory cache used when Redis is not configured or unreachable at
/// startup.
///
/// Entries live until invalidated or until the process exits; there is no
/// TTL-based eviction. Suitable for single-instance deployments and tests.
#[derive(Default)]
pub struct MemoryCache {
    entries: DashMap<String, UrlRecord>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_record(&self, alias: &str) -> CacheResult<Option<UrlRecord>> {
        Ok(self.entries.get(alias).map(|r| r.clone()))
    }

    async fn put_record(&self, record: &UrlRecord) -> CacheResult<()> {
        self.entries.insert(record.alias.clone(), record.clone());
        Ok(())
    }

    async fn invalidate(&self, alias: &str) -> CacheResult<()> {
        if self.entries.remove(alias).is_some() {
            debug!("evicted cache entry for {alias}");
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
