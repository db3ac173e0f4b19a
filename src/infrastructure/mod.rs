//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence, caching, and shared
//! rate-limit counters.
//!
//! # Modules
//!
//! - [`cache`] - Resolution cache (Redis and in-memory implementations)
//! - [`counter`] - Fixed-window counters (Redis and in-memory implementations)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod cache;
pub mod counter;
pub mod persistence;
