//! Short URL creation endpoint.

use std::net::SocketAddr;

use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::HeaderMap,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::derive_client_ip;

/// Creates a short URL for a long URL.
///
/// `POST /api/shorten` takes a JSON body with `long_url` plus optional
/// `custom_alias` and `expires_at` fields and answers with the full short
/// URL, the alias, and the original URL. The client address (honoring
/// `X-Forwarded-For`) is stored with the mapping as its creator.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails and 409 Conflict if the
/// requested custom alias is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let creator_ip = derive_client_ip(&headers, addr.ip());

    let record = state
        .urls
        .create_short_url(
            payload.long_url,
            payload.custom_alias,
            Some(creator_ip),
            payload.expires_at,
        )
        .await?;

    let short_url = format!("{}/{}", state.base_url.trim_end_matches('/'), record.alias);

    Ok(Json(ShortenResponse {
        short_url,
        alias: record.alias,
        long_url: record.long_url,
    }))
}
