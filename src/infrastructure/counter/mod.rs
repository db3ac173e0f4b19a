//! Shared counters backing the fixed-window rate limiter.
//!
//! Provides a [`CounterStore`] trait with two implementations:
//! - [`RedisCounterStore`] - Production counters shared across instances
//! - [`MemoryCounterStore`] - Per-instance fallback when Redis is unavailable

mod memory_counter;
mod redis_counter;
mod store;

pub use memory_counter::MemoryCounterStore;
pub use redis_counter::RedisCounterStore;
pub use store::{CounterError, CounterStore};

#[cfg(test)]
pub use store::MockCounterStore;
