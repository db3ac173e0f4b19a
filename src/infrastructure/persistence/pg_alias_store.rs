//! PostgreSQL implementation of the alias store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewClick, NewUrlRecord, UrlRecord};
use crate::domain::repositories::AliasStore;
use crate::error::AppError;

/// PostgreSQL store for alias mappings and the click log.
///
/// Uses SQLx prepared statements for SQL injection protection. The UNIQUE
/// constraint on `url_mappings.alias` backs the conflict guarantee of
/// [`AliasStore::save`].
pub struct PgAliasStore {
    pool: Arc<PgPool>,
}

impl PgAliasStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UrlRecordRow {
    id: i64,
    alias: String,
    long_url: String,
    created_by_ip: Option<String>,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    active: bool,
    custom_alias: bool,
}

impl From<UrlRecordRow> for UrlRecord {
    fn from(row: UrlRecordRow) -> Self {
        UrlRecord::new(
            row.id,
            row.alias,
            row.long_url,
            row.created_by_ip,
            row.created_at,
            row.expires_at,
            row.active,
            row.custom_alias,
        )
    }
}

#[async_trait]
impl AliasStore for PgAliasStore {
    async fn exists(&self, alias: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM url_mappings WHERE alias = $1)")
                .bind(alias)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRecordRow>(
            r#"
            SELECT id, alias, long_url, created_by_ip, created_at, expires_at, active, custom_alias
            FROM url_mappings
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn save(&self, record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let row = sqlx::query_as::<_, UrlRecordRow>(
            r#"
            INSERT INTO url_mappings (alias, long_url, created_by_ip, expires_at, custom_alias)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, alias, long_url, created_by_ip, created_at, expires_at, active, custom_alias
            "#,
        )
        .bind(&record.alias)
        .bind(&record.long_url)
        .bind(&record.created_by_ip)
        .bind(record.expires_at)
        .bind(record.custom_alias)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn append_click(&self, click: NewClick) -> Result<(), AppError> {
        sqlx::query("INSERT INTO click_events (alias, ip, user_agent) VALUES ($1, $2, $3)")
            .bind(&click.alias)
            .bind(&click.ip)
            .bind(&click.user_agent)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn count_clicks(&self, alias: &str) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM click_events WHERE alias = $1")
            .bind(alias)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
