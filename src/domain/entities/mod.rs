//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures of the URL shortening
//! service. Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A shortened URL mapping
//! - [`Click`] - A click event on a shortened URL
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewUrlRecord` and `NewClick` carry only the caller-supplied fields, the
//! store assigns identity and timestamps at write time.

pub mod click;
pub mod url_record;

pub use click::{Click, NewClick};
pub use url_record::{NewUrlRecord, UrlRecord};
