//! Alias redirect endpoint.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::derive_client_ip;

/// Redirects a short alias to its original URL.
///
/// `GET /{alias}` resolves through the cache-backed lookup, records the
/// click, and answers 307 Temporary Redirect. The click is written before
/// the response goes out, so a served redirect is always counted; the write
/// itself is best-effort and a failed insert only logs.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown alias and 410 Gone for an inactive
/// or expired one.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.urls.resolve_for_redirect(&alias).await?;

    let ip = derive_client_ip(&headers, addr.ip());
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let referrer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    state
        .urls
        .record_click(&record.alias, Some(ip), user_agent, referrer)
        .await;

    Ok(Redirect::temporary(&record.long_url))
}
