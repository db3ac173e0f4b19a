//! Server assembly and lifecycle.
//!
//! Wires the connection pool, cache, counters and services into an
//! [`AppState`], then drives the axum server until a shutdown signal.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::application::services::{RateLimitService, UrlService};
use crate::config::Config;
use crate::infrastructure::cache::{CacheService, MemoryCache, RedisCache};
use crate::infrastructure::counter::{CounterStore, MemoryCounterStore, RedisCounterStore};
use crate::infrastructure::persistence::PgAliasStore;
use crate::routes::app_router;
use crate::state::AppState;

/// Brings the service up and serves requests until Ctrl-C or SIGTERM.
///
/// Startup is fail-fast for the database (pool and migrations) and
/// fail-soft for Redis: when `REDIS_URL` is unset or unreachable, the
/// cache and the counters fall back to their in-process implementations.
///
/// # Errors
///
/// Fails when the database is unreachable, migrations cannot be applied,
/// or the listen address cannot be bound.
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_database(&config).await?;
    let cache = build_cache(&config).await;
    let counters = build_counters(&config).await;

    let store = Arc::new(PgAliasStore::new(Arc::new(pool)));
    let urls = Arc::new(UrlService::new(
        store,
        cache.clone(),
        config.default_expiration_days,
    ));
    let rate_limiter = Arc::new(RateLimitService::new(
        counters,
        config.rate_limit_max_requests,
        Duration::from_secs(config.rate_limit_window_seconds),
    ));

    let state = AppState {
        urls,
        rate_limiter,
        cache,
        base_url: config.base_url.clone(),
    };

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("bad listen address {:?}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("serving on http://{addr}");

    let app = app_router(state);
    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Opens the connection pool and applies pending migrations.
async fn connect_database(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("connecting to PostgreSQL")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("applying migrations")?;

    tracing::info!("database ready, migrations applied");
    Ok(pool)
}

/// Picks the resolution cache: Redis when configured and reachable,
/// otherwise the in-process map.
async fn build_cache(config: &Config) -> Arc<dyn CacheService> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("REDIS_URL unset, using in-process cache");
        return Arc::new(MemoryCache::new());
    };
    match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
        Ok(redis) => Arc::new(redis),
        Err(e) => {
            tracing::warn!("Redis cache unavailable ({e}), using in-process cache");
            Arc::new(MemoryCache::new())
        }
    }
}

/// Picks the admission counter store. The Redis store shares one quota
/// across all instances; the fallback counts per process.
async fn build_counters(config: &Config) -> Arc<dyn CounterStore> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("REDIS_URL unset, using in-process rate-limit counters");
        return Arc::new(MemoryCounterStore::new());
    };
    match RedisCounterStore::connect(redis_url).await {
        Ok(redis) => Arc::new(redis),
        Err(e) => {
            tracing::warn!("Redis counters unavailable ({e}), using in-process counters");
            Arc::new(MemoryCounterStore::new())
        }
    }
}

/// Resolves on Ctrl-C or SIGTERM, letting in-flight requests drain.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Ctrl-C handler installation failed");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation failed")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received, draining connections");
}
