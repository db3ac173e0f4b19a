//! Fixed-window admission control for the creation endpoint.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::infrastructure::counter::CounterStore;

/// Outcome of one admission check.
///
/// `Unenforced` is the fail-open case: the counter store could not be
/// reached, so the request proceeds with no quota accounting and no
/// rate-limit headers. The limiter protects a best-effort quota, not a
/// security boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionDecision {
    Allowed {
        limit: u64,
        remaining: u64,
        window_seconds: u64,
    },
    Denied {
        limit: u64,
        window_seconds: u64,
    },
    Unenforced,
}

/// Fixed-window request counter per client identity.
///
/// One window per client: the first request in a fresh window arms the
/// window's TTL, subsequent requests increment the shared count until the
/// limit is reached, and the count resets implicitly when the key expires.
pub struct RateLimitService {
    counters: Arc<dyn CounterStore>,
    max_requests: u64,
    window: Duration,
}

impl RateLimitService {
    /// Creates a new rate limiter over the given counter store.
    pub fn new(counters: Arc<dyn CounterStore>, max_requests: u64, window: Duration) -> Self {
        Self {
            counters,
            max_requests,
            window,
        }
    }

    /// Runs the fixed-window admission check for one client identity.
    ///
    /// # Algorithm
    ///
    /// 1. Read the live count; an absent or expired key counts as 0.
    /// 2. At or above the limit: deny without mutating the window.
    /// 3. Otherwise increment, arming the window TTL when this was the
    ///    first request of a fresh window, and allow with
    ///    `remaining = limit - count - 1`.
    ///
    /// Any counter-store failure fails open ([`AdmissionDecision::Unenforced`]).
    pub async fn admit(&self, client_id: &str) -> AdmissionDecision {
        let current = match self.counters.get(client_id).await {
            Ok(count) => count.unwrap_or(0),
            Err(e) => {
                warn!(client_id = %client_id, error = %e, "counter store unreachable, admitting request unchecked");
                return AdmissionDecision::Unenforced;
            }
        };

        if current >= self.max_requests {
            return AdmissionDecision::Denied {
                limit: self.max_requests,
                window_seconds: self.window.as_secs(),
            };
        }

        if let Err(e) = self.counters.increment(client_id).await {
            warn!(client_id = %client_id, error = %e, "counter increment failed, admitting request unchecked");
            return AdmissionDecision::Unenforced;
        }

        if current == 0 {
            if let Err(e) = self.counters.expire(client_id, self.window).await {
                warn!(client_id = %client_id, error = %e, "failed to arm rate limit window, admitting request unchecked");
                return AdmissionDecision::Unenforced;
            }
        }

        AdmissionDecision::Allowed {
            limit: self.max_requests,
            remaining: self.max_requests - current - 1,
            window_seconds: self.window.as_secs(),
        }
    }

    /// Probes the counter store, for health reporting.
    pub async fn store_healthy(&self) -> bool {
        self.counters.health_check().await
    }
}
