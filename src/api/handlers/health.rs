//! Service health endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Reports reachability of the store, the cache and the admission counters.
///
/// `GET /health` answers 200 while the database responds, even with cache or
/// counter trouble: both of those degrade at request time (lookups fall back
/// to the database, admission fails open), so they are advertised as down
/// without failing the probe. A dead database means no redirects at all and
/// turns the response into a 503.
///
/// The overall `status` field reads `healthy` only when every check is up,
/// `degraded` otherwise.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let (database, cache, rate_limiter) = tokio::join!(
        check_database(&state),
        check_cache(&state),
        check_rate_limiter(&state),
    );

    let db_up = database.is_up();
    let all_up = db_up && cache.is_up() && rate_limiter.is_up();

    let response = HealthResponse {
        status: if all_up { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database,
            cache,
            rate_limiter,
        },
    };

    if db_up {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Round-trip query through the alias store.
async fn check_database(state: &AppState) -> CheckStatus {
    if state.urls.ping().await {
        CheckStatus::up()
    } else {
        CheckStatus::down("Database unreachable")
    }
}

/// Cache backend PING.
async fn check_cache(state: &AppState) -> CheckStatus {
    if state.cache.health_check().await {
        CheckStatus::up()
    } else {
        CheckStatus::down("Cache backend unreachable, lookups fall back to the database")
    }
}

/// Counter store PING.
async fn check_rate_limiter(state: &AppState) -> CheckStatus {
    if state.rate_limiter.store_healthy().await {
        CheckStatus::up()
    } else {
        CheckStatus::down("Counter store unreachable, admission checks fail open")
    }
}
