use std::sync::Arc;

use crate::application::services::{RateLimitService, UrlService};
use crate::infrastructure::cache::CacheService;

/// Shared handler state, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub urls: Arc<UrlService>,
    pub rate_limiter: Arc<RateLimitService>,
    pub cache: Arc<dyn CacheService>,
    pub base_url: String,
}
