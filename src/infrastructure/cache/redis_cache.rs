//! Redis-backed resolution cache.

use super::service::{CacheError, CacheResult, CacheService};
use crate::domain::entities::UrlRecord;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

const KEY_PREFIX: &str = "alias:";

fn cache_key(alias: &str) -> String {
    format!("{KEY_PREFIX}{alias}")
}

/// Redis cache for resolved alias records.
///
/// Records are stored whole, as JSON, under `alias:`-prefixed keys with a
/// fixed TTL. A shared `ConnectionManager` handles reconnects. Every trait
/// method is fail-open: Redis errors are logged and reported as a miss or a
/// no-op, never as a failure.
pub struct RedisCache {
    conn: ConnectionManager,
    ttl: u64,
}

impl RedisCache {
    /// Connects, verifies the connection with a PING, and fixes the entry
    /// TTL (seconds, from `CACHE_TTL_SECONDS`).
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] when the URL does not parse,
    /// the connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, ttl_seconds: u64) -> CacheResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| CacheError::ConnectionError(format!("invalid Redis URL: {e}")))?;

        let mut conn = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis connection failed: {e}")))?;

        conn.ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {e}")))?;

        info!("Redis cache connected (entry TTL {ttl_seconds}s)");
        Ok(Self {
            conn,
            ttl: ttl_seconds,
        })
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_record(&self, alias: &str) -> CacheResult<Option<UrlRecord>> {
        let mut conn = self.conn.clone();

        let payload: Option<String> = match conn.get(cache_key(alias)).await {
            Ok(payload) => payload,
            Err(e) => {
                error!("Redis GET failed for {alias}: {e}");
                return Ok(None);
            }
        };
        let Some(payload) = payload else {
            debug!("cache miss for {alias}");
            return Ok(None);
        };

        match serde_json::from_str(&payload) {
            Ok(record) => {
                debug!("cache hit for {alias}");
                Ok(Some(record))
            }
            Err(e) => {
                warn!("dropping corrupt cache entry for {alias}: {e}");
                Ok(None)
            }
        }
    }

    async fn put_record(&self, record: &UrlRecord) -> CacheResult<()> {
        let payload = match serde_json::to_string(record) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("could not serialize cache entry for {}: {e}", record.alias);
                return Ok(());
            }
        };

        let mut conn = self.conn.clone();
        match conn
            .set_ex::<_, _, ()>(cache_key(&record.alias), payload, self.ttl)
            .await
        {
            Ok(()) => debug!("cached {} for {}s", record.alias, self.ttl),
            Err(e) => warn!("Redis SETEX failed for {}: {e}", record.alias),
        }
        Ok(())
    }

    async fn invalidate(&self, alias: &str) -> CacheResult<()> {
        let mut conn = self.conn.clone();
        match conn.del::<_, u32>(cache_key(alias)).await {
            Ok(0) => {}
            Ok(_) => debug!("evicted cache entry for {alias}"),
            Err(e) => warn!("Redis DEL failed for {alias}: {e}"),
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }
}
