#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use chrono::{Duration as ChronoDuration, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use tower::Layer;

use shortling::application::services::{RateLimitService, UrlService};
use shortling::domain::entities::{Click, NewClick, NewUrlRecord, UrlRecord};
use shortling::domain::repositories::AliasStore;
use shortling::error::AppError;
use shortling::infrastructure::cache::MemoryCache;
use shortling::infrastructure::counter::MemoryCounterStore;
use shortling::state::AppState;

pub const TEST_BASE_URL: &str = "http://sho.rt";

/// In-memory alias store backing handler tests.
///
/// Honors the durable store's contract, including alias uniqueness at save
/// time, so handler tests exercise the same conflict path as the real store.
pub struct MemoryAliasStore {
    records: DashMap<String, UrlRecord>,
    clicks: DashMap<String, Vec<Click>>,
    next_id: AtomicI64,
    healthy: AtomicBool,
}

impl Default for MemoryAliasStore {
    fn default() -> Self {
        Self {
            records: DashMap::new(),
            clicks: DashMap::new(),
            next_id: AtomicI64::new(0),
            healthy: AtomicBool::new(true),
        }
    }
}

impl MemoryAliasStore {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Inserts a record directly, bypassing the uniqueness check.
    pub fn seed(&self, mut record: UrlRecord) -> UrlRecord {
        record.id = self.next_id();
        self.records.insert(record.alias.clone(), record.clone());
        record
    }

    /// Clicks appended for the given alias, in arrival order.
    pub fn recorded_clicks(&self, alias: &str) -> Vec<Click> {
        self.clicks
            .get(alias)
            .map(|c| c.value().clone())
            .unwrap_or_default()
    }

    /// Flips what `ping` reports, for health-check tests.
    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }
}

#[async_trait]
impl AliasStore for MemoryAliasStore {
    async fn exists(&self, alias: &str) -> Result<bool, AppError> {
        Ok(self.records.contains_key(alias))
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.records.get(alias).map(|r| r.value().clone()))
    }

    async fn save(&self, record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let stored = UrlRecord {
            id: self.next_id(),
            alias: record.alias.clone(),
            long_url: record.long_url,
            created_by_ip: record.created_by_ip,
            created_at: Utc::now(),
            expires_at: record.expires_at,
            active: true,
            custom_alias: record.custom_alias,
        };

        match self.records.entry(record.alias) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Alias already exists",
                json!({ "constraint": "url_mappings_alias_key" }),
            )),
            Entry::Vacant(slot) => {
                slot.insert(stored.clone());
                Ok(stored)
            }
        }
    }

    async fn append_click(&self, click: NewClick) -> Result<(), AppError> {
        let alias = click.alias.clone();
        let recorded = Click::record(self.next_id(), Utc::now(), click);
        self.clicks.entry(alias).or_default().push(recorded);
        Ok(())
    }

    async fn count_clicks(&self, alias: &str) -> Result<i64, AppError> {
        Ok(self
            .clicks
            .get(alias)
            .map(|c| c.value().len() as i64)
            .unwrap_or(0))
    }

    async fn ping(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }
}

pub fn create_test_alias(store: &MemoryAliasStore, alias: &str, long_url: &str) -> UrlRecord {
    store.seed(UrlRecord {
        id: 0,
        alias: alias.to_string(),
        long_url: long_url.to_string(),
        created_by_ip: None,
        created_at: Utc::now(),
        expires_at: Some(Utc::now() + ChronoDuration::days(30)),
        active: true,
        custom_alias: false,
    })
}

pub fn create_expired_alias(store: &MemoryAliasStore, alias: &str, long_url: &str) -> UrlRecord {
    store.seed(UrlRecord {
        id: 0,
        alias: alias.to_string(),
        long_url: long_url.to_string(),
        created_by_ip: None,
        created_at: Utc::now() - ChronoDuration::days(2),
        expires_at: Some(Utc::now() - ChronoDuration::hours(1)),
        active: true,
        custom_alias: false,
    })
}

pub fn create_inactive_alias(store: &MemoryAliasStore, alias: &str, long_url: &str) -> UrlRecord {
    store.seed(UrlRecord {
        id: 0,
        alias: alias.to_string(),
        long_url: long_url.to_string(),
        created_by_ip: None,
        created_at: Utc::now(),
        expires_at: Some(Utc::now() + ChronoDuration::days(30)),
        active: false,
        custom_alias: true,
    })
}

/// Builds an [`AppState`] wired to in-memory backends.
///
/// Returns the store handle alongside the state so tests can seed records
/// and inspect appended clicks.
pub fn create_test_state(
    max_requests: u64,
    window: Duration,
) -> (AppState, Arc<MemoryAliasStore>) {
    let store = Arc::new(MemoryAliasStore::default());
    let cache = Arc::new(MemoryCache::new());

    let urls = Arc::new(UrlService::new(store.clone(), cache.clone(), 30));
    let rate_limiter = Arc::new(RateLimitService::new(
        Arc::new(MemoryCounterStore::new()),
        max_requests,
        window,
    ));

    let state = AppState {
        urls,
        rate_limiter,
        cache,
        base_url: TEST_BASE_URL.to_string(),
    };

    (state, store)
}

/// Stamps every request with a fixed peer address, standing in for a real
/// socket accept. Handlers extracting `ConnectInfo<SocketAddr>` see `self.0`.
#[derive(Clone)]
pub struct FakePeerAddr(pub SocketAddr);

impl FakePeerAddr {
    pub fn localhost() -> Self {
        Self(SocketAddr::from(([127, 0, 0, 1], 40000)))
    }
}

impl<S> Layer<S> for FakePeerAddr {
    type Service = FakePeerAddrService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        FakePeerAddrService {
            addr: self.0,
            inner,
        }
    }
}

#[derive(Clone)]
pub struct FakePeerAddrService<S> {
    addr: SocketAddr,
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for FakePeerAddrService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        req.extensions_mut().insert(ConnectInfo(self.addr));
        self.inner.call(req)
    }
}
