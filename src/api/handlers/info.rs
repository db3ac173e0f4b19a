//! Alias metadata and analytics endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::info::{AliasInfoResponse, ClickCountResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves metadata for a short URL.
///
/// `GET /api/info/{alias}` reports the original URL, timestamps, the click
/// count, and whether the alias was chosen by the creator. Inactive and
/// expired aliases still report their metadata; only a missing alias is an
/// error.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn alias_info_handler(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<Json<AliasInfoResponse>, AppError> {
    let record = state
        .urls
        .find_by_alias(&alias)
        .await?
        .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "alias": alias })))?;

    let clicks = state.urls.click_count(&record.alias).await?;

    Ok(Json(AliasInfoResponse {
        alias: record.alias,
        long_url: record.long_url,
        created_at: record.created_at,
        expires_at: record.expires_at,
        clicks,
        custom: record.custom_alias,
    }))
}

/// Retrieves the aggregated click count for a short URL.
///
/// `GET /api/analytics/{alias}/clicks` answers with the alias and its total
/// recorded clicks, including clicks on a now-expired or deactivated alias.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn click_count_handler(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<Json<ClickCountResponse>, AppError> {
    let record = state
        .urls
        .find_by_alias(&alias)
        .await?
        .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "alias": alias })))?;

    let total_clicks = state.urls.click_count(&record.alias).await?;

    Ok(Json(ClickCountResponse {
        alias: record.alias,
        total_clicks,
    }))
}
