//! Alias generation and validation utilities.
//!
//! Provides random alias generation over the 62-symbol alphabet
//! `[0-9a-zA-Z]` and shape validation for user-provided custom aliases.

use std::sync::LazyLock;

use rand::distr::{Alphanumeric, SampleString};
use regex::Regex;
use serde_json::json;

use crate::error::AppError;

/// Default length of generated aliases.
pub const DEFAULT_ALIAS_LENGTH: usize = 5;

/// Reserved aliases that cannot be used as short links.
///
/// These names collide with fixed routes and would be unreachable.
const RESERVED_ALIASES: &[&str] = &["api", "health"];

static ALIAS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias regex is valid"));

/// Generates a random alias of exactly `length` characters.
///
/// Every character is drawn uniformly, with replacement, from the 62-symbol
/// alphabet `[0-9a-zA-Z]`. A zero length yields an empty string. The
/// thread-local generator makes concurrent invocation race-free.
///
/// Uniqueness is not guaranteed here; the store's unique constraint catches
/// the rare collision.
pub fn generate_alias(length: usize) -> String {
    Alphanumeric.sample_string(&mut rand::rng(), length)
}

/// Validates a user-provided custom alias.
///
/// Accepts 3 to 64 characters drawn from ASCII letters, digits, hyphen and
/// underscore, and refuses names that collide with fixed routes.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_alias(alias: &str) -> Result<(), AppError> {
    if alias.len() < 3 || alias.len() > 64 {
        return Err(AppError::bad_request(
            "Custom alias must be 3-64 characters",
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !ALIAS_RE.is_match(alias) {
        return Err(AppError::bad_request(
            "Custom alias can only contain letters, digits, hyphens, and underscores",
            json!({ "alias": alias }),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}
