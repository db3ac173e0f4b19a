//! Target URL validation.
//!
//! Shortened targets are stored verbatim, so validation is the only gate
//! between user input and redirect responses.

use url::Url;

/// Maximum accepted target URL length, matching the storage column.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("not an absolute URL: {0}")]
    Malformed(String),

    #[error("scheme {0:?} is not allowed, only http and https")]
    DisallowedScheme(String),

    #[error("URL exceeds the {MAX_URL_LENGTH} character limit")]
    TooLong,
}

/// Validates a target URL before a mapping is allocated for it.
///
/// The input must parse as an absolute `http` or `https` URL of at most
/// [`MAX_URL_LENGTH`] characters. Restricting the scheme keeps redirects
/// from ever pointing at `javascript:`, `data:`, `file:` and the like.
///
/// # Errors
///
/// Returns the matching [`UrlValidationError`] variant for each rule.
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    if input.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(UrlValidationError::DisallowedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https() {
        assert!(validate_target_url("https://example.com/path?q=1").is_ok());
    }

    #[test]
    fn test_accepts_http() {
        assert!(validate_target_url("http://example.com").is_ok());
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(matches!(
            validate_target_url("/just/a/path"),
            Err(UrlValidationError::Malformed(_))
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            validate_target_url("not a url"),
            Err(UrlValidationError::Malformed(_))
        ));
    }

    #[test]
    fn test_rejects_javascript_scheme() {
        assert!(matches!(
            validate_target_url("javascript:alert(1)"),
            Err(UrlValidationError::DisallowedScheme(s)) if s == "javascript"
        ));
    }

    #[test]
    fn test_rejects_ftp_scheme() {
        assert!(matches!(
            validate_target_url("ftp://example.com/file"),
            Err(UrlValidationError::DisallowedScheme(_))
        ));
    }

    #[test]
    fn test_rejects_overlong_url() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(
            validate_target_url(&url),
            Err(UrlValidationError::TooLong)
        ));
    }

    #[test]
    fn test_accepts_url_at_limit() {
        let prefix = "https://example.com/";
        let url = format!("{}{}", prefix, "a".repeat(MAX_URL_LENGTH - prefix.len()));
        assert_eq!(url.len(), MAX_URL_LENGTH);
        assert!(validate_target_url(&url).is_ok());
    }
}
