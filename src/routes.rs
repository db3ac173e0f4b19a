//! Top-level router: redirect and health probe at the root, the JSON API
//! nested under `/api`, tracing around everything and trailing-slash
//! normalization outermost.
//!
//! Routes:
//!
//! - `GET  /{alias}` redirect
//! - `GET  /health` component diagnostics
//! - `POST /api/shorten` creation, admission-controlled
//! - `GET  /api/info/{alias}` metadata
//! - `GET  /api/analytics/{alias}/clicks` click count

use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;

/// Builds the complete service router.
///
/// Admission control wraps only the creation route. Redirects, lookups and
/// the health probe stay outside the limiter, so read traffic is never
/// throttled by a busy creator.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::creation_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::layer,
        ))
        .merge(api::routes::lookup_routes());

    let router = Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
