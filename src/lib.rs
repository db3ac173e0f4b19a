//! Shortling, a small URL shortener.
//!
//! The service allocates short aliases for long URLs (randomly generated or
//! caller-chosen), redirects visitors while tracking each click, and applies
//! fixed-window rate limiting to alias creation. Postgres is the system of
//! record. Redis, when configured, carries the resolution cache and the
//! admission counters shared between instances; without it both concerns run
//! on in-process fallbacks, which keeps single-node deployments
//! dependency-light.
//!
//! Layout: [`domain`] holds the entities and the alias store trait,
//! [`application`] the services orchestrating them, [`infrastructure`] the
//! Postgres, Redis and in-memory backends, and [`api`] the HTTP surface.
//! [`config`] reads the environment (see its docs for every variable) and
//! [`server`] wires the whole thing together; migrations are embedded and
//! run at startup.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Re-exports for integration tests and embedding consumers.
pub mod prelude {
    pub use crate::application::services::{AdmissionDecision, RateLimitService, UrlService};
    pub use crate::domain::entities::{Click, NewClick, NewUrlRecord, UrlRecord};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
