//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements.
//!
//! # Repositories
//!
//! - [`PgAliasStore`] - Alias mappings and the click log

pub mod pg_alias_store;

pub use pg_alias_store::PgAliasStore;
