//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data
//! access operations following the Repository pattern. Concrete
//! implementations live in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`AliasStore`] - Durable alias mappings and the click log

pub mod alias_store;

pub use alias_store::AliasStore;

#[cfg(test)]
pub use alias_store::MockAliasStore;
