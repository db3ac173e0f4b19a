//! API route configuration.
//!
//! Creation routes are rate limited via
//! [`crate::api::middleware::rate_limit`]; lookup routes are not.

use crate::api::handlers::{alias_info_handler, click_count_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes that create new state, subject to admission control.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short URL
pub fn creation_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}

/// Read-only lookup routes, exempt from admission control.
///
/// # Endpoints
///
/// - `GET /info/{alias}`             - Metadata for a short URL
/// - `GET /analytics/{alias}/clicks` - Aggregated click count
pub fn lookup_routes() -> Router<AppState> {
    Router::new()
        .route("/info/{alias}", get(alias_info_handler))
        .route("/analytics/{alias}/clicks", get(click_count_handler))
}
