//! Redis-backed counter store.

use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::info;

use super::store::{CounterError, CounterStore};

const KEY_PREFIX: &str = "ratelimit:";

fn counter_key(key: &str) -> String {
    format!("{KEY_PREFIX}{key}")
}

/// Redis counters shared by all service instances behind one quota.
///
/// Uses GET/INCR/EXPIRE under a namespaced key. INCR is atomic on the
/// server, which serializes concurrent increments for one client. Errors
/// propagate to the caller; the admission policy decides what an
/// unreachable store means.
pub struct RedisCounterStore {
    conn: ConnectionManager,
}

impl RedisCounterStore {
    /// Connects and verifies the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::ConnectionError`] when the URL does not
    /// parse, the connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> Result<Self, CounterError> {
        let client = Client::open(redis_url)
            .map_err(|e| CounterError::ConnectionError(format!("invalid Redis URL: {e}")))?;

        let mut conn = ConnectionManager::new(client)
            .await
            .map_err(|e| CounterError::ConnectionError(format!("Redis connection failed: {e}")))?;

        conn.ping::<()>()
            .await
            .map_err(|e| CounterError::ConnectionError(format!("Redis PING failed: {e}")))?;

        info!("Redis rate-limit counter store connected");
        Ok(Self { conn })
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn get(&self, key: &str) -> Result<Option<u64>, CounterError> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<u64>>(counter_key(key))
            .await
            .map_err(|e| CounterError::OperationError(format!("Redis GET failed: {e}")))
    }

    async fn increment(&self, key: &str) -> Result<u64, CounterError> {
        let mut conn = self.conn.clone();
        conn.incr::<_, _, u64>(counter_key(key), 1u64)
            .await
            .map_err(|e| CounterError::OperationError(format!("Redis INCR failed: {e}")))
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<(), CounterError> {
        let mut conn = self.conn.clone();
        conn.expire::<_, i64>(counter_key(key), ttl.as_secs() as i64)
            .await
            .map(|_| ())
            .map_err(|e| CounterError::OperationError(format!("Redis EXPIRE failed: {e}")))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }
}
