//! Alias allocation, resolution, and click recording service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use tracing::warn;

use crate::domain::entities::{NewClick, NewUrlRecord, UrlRecord};
use crate::domain::repositories::AliasStore;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::alias_generator::{DEFAULT_ALIAS_LENGTH, generate_alias, validate_custom_alias};
use crate::utils::url_validator::validate_target_url;

/// Service for creating and resolving shortened URLs.
///
/// Owns the cache-aside protocol: reads go cache-first with store fallback,
/// creations write to the store and then invalidate the cache entry for the
/// new alias, in that order.
pub struct UrlService {
    store: Arc<dyn AliasStore>,
    cache: Arc<dyn CacheService>,
    default_expiration_days: i64,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(
        store: Arc<dyn AliasStore>,
        cache: Arc<dyn CacheService>,
        default_expiration_days: i64,
    ) -> Self {
        Self {
            store,
            cache,
            default_expiration_days,
        }
    }

    /// Creates a shortened URL mapping.
    ///
    /// # Alias Allocation
    ///
    /// - A non-blank `custom_alias` is validated and checked for existence;
    ///   a taken alias is a conflict. The check is a fast-path rejection
    ///   only: two racing creators can both pass it, and the second save
    ///   then fails on the store's unique constraint, which surfaces as the
    ///   same conflict error.
    /// - Without a custom alias, a random 5-character candidate is saved
    ///   directly. No existence check is performed; a collision is rare
    ///   enough that the unique constraint alone handles it.
    ///
    /// # Expiration
    ///
    /// A missing `expires_at` defaults to now plus the configured number of
    /// days.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed URL or custom alias,
    /// [`AppError::Conflict`] when the alias is already taken.
    pub async fn create_short_url(
        &self,
        long_url: String,
        custom_alias: Option<String>,
        creator_ip: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<UrlRecord, AppError> {
        validate_target_url(&long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "cause": e.to_string() }))
        })?;

        let custom = custom_alias
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        let (alias, is_custom) = match custom {
            Some(alias) => {
                validate_custom_alias(alias)?;

                if self.store.exists(alias).await? {
                    return Err(AppError::conflict(
                        "Alias already exists",
                        json!({ "alias": alias }),
                    ));
                }

                (alias.to_string(), true)
            }
            None => (generate_alias(DEFAULT_ALIAS_LENGTH), false),
        };

        let expires_at = expires_at
            .unwrap_or_else(|| Utc::now() + Duration::days(self.default_expiration_days));

        let saved = self
            .store
            .save(NewUrlRecord {
                alias,
                long_url,
                created_by_ip: creator_ip,
                expires_at: Some(expires_at),
                custom_alias: is_custom,
            })
            .await?;

        // Save first, invalidate second. A failed invalidation is logged and
        // tolerated: misses are never cached, so no stale entry can shadow
        // the new record.
        if let Err(e) = self.cache.invalidate(&saved.alias).await {
            warn!(alias = %saved.alias, error = %e, "cache invalidation after save failed");
        }

        Ok(saved)
    }

    /// Looks up a record by alias, reading through the resolution cache.
    ///
    /// Cache errors degrade to a store lookup; a record found in the store
    /// is written back to the cache. Store misses are not cached.
    pub async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlRecord>, AppError> {
        match self.cache.get_record(alias).await {
            Ok(Some(record)) => return Ok(Some(record)),
            Ok(None) => {}
            Err(e) => {
                warn!(alias = %alias, error = %e, "cache read failed, falling back to store");
            }
        }

        let record = self.store.find_by_alias(alias).await?;

        if let Some(record) = &record {
            if let Err(e) = self.cache.put_record(record).await {
                warn!(alias = %alias, error = %e, "cache population failed");
            }
        }

        Ok(record)
    }

    /// Resolves an alias for redirection, enforcing validity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown alias and
    /// [`AppError::Gone`] for an inactive or expired one. Inactivity wins
    /// over expiration when both apply.
    pub async fn resolve_for_redirect(&self, alias: &str) -> Result<UrlRecord, AppError> {
        let record = self
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "alias": alias })))?;

        if !record.active {
            return Err(AppError::gone(
                "Short URL is no longer active",
                json!({ "alias": alias }),
            ));
        }

        if record.is_expired() {
            return Err(AppError::gone(
                "Short URL has expired",
                json!({ "alias": alias }),
            ));
        }

        Ok(record)
    }

    /// Records one click against an alias, best-effort.
    ///
    /// Append failures are logged and swallowed; a redirect must never fail
    /// because its click could not be stored. `_referrer` is accepted from
    /// the capture site but is not part of the stored event.
    pub async fn record_click(
        &self,
        alias: &str,
        ip: Option<String>,
        user_agent: Option<String>,
        _referrer: Option<String>,
    ) {
        let click = NewClick {
            alias: alias.to_string(),
            ip,
            user_agent,
        };

        if let Err(e) = self.store.append_click(click).await {
            warn!(alias = %alias, error = %e, "failed to record click");
        }
    }

    /// Returns the number of recorded clicks for an alias.
    pub async fn click_count(&self, alias: &str) -> Result<i64, AppError> {
        self.store.count_clicks(alias).await
    }

    /// Probes the durable store, for health reporting.
    pub async fn ping(&self) -> bool {
        self.store.ping().await
    }
}
