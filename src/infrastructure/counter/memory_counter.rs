//! In-process counter store.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use super::store::{CounterError, CounterStore};

struct Window {
    count: u64,
    deadline: Option<Instant>,
}

impl Window {
    fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| d <= Instant::now())
    }
}

/// In-memory counters used when Redis is not configured or unreachable at
/// startup.
///
/// Quotas are tracked per process, so in a multi-instance deployment each
/// instance enforces its own limit rather than a shared one.
#[derive(Default)]
pub struct MemoryCounterStore {
    windows: DashMap<String, Window>,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn get(&self, key: &str) -> Result<Option<u64>, CounterError> {
        Ok(self
            .windows
            .get(key)
            .and_then(|w| if w.is_expired() { None } else { Some(w.count) }))
    }

    async fn increment(&self, key: &str) -> Result<u64, CounterError> {
        let mut window = self.windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            deadline: None,
        });

        if window.is_expired() {
            window.count = 0;
            window.deadline = None;
        }

        window.count += 1;
        Ok(window.count)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<(), CounterError> {
        if let Some(mut window) = self.windows.get_mut(key) {
            window.deadline = Some(Instant::now() + ttl);
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
