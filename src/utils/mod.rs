//! Utility functions for alias generation, URL checks, and request handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`alias_generator`] - Random alias generation and custom-alias validation
//! - [`client_ip`] - Client identity derivation from forwarding headers
//! - [`url_validator`] - Target URL validation

pub mod alias_generator;
pub mod client_ip;
pub mod url_validator;
