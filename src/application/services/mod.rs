//! Business logic services for the application layer.

pub mod rate_limit_service;
pub mod url_service;

pub use rate_limit_service::{AdmissionDecision, RateLimitService};
pub use url_service::UrlService;
