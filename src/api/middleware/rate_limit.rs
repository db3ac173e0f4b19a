//! Fixed-window rate limiting middleware for the creation endpoint.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::application::services::AdmissionDecision;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::derive_client_ip;

/// Admission check for link creation, keyed by client identity.
///
/// Identity is the first entry of `X-Forwarded-For`, else `X-Real-IP`, else
/// the socket peer address; it selects which requests share a quota.
/// Mounted on the creation routes with `middleware::from_fn_with_state`.
///
/// While the counter store is reachable, admitted and denied responses both
/// carry `X-RateLimit-Limit`, `X-RateLimit-Remaining` and
/// `X-RateLimit-Window`; a denial is `429 Too Many Requests` plus a
/// `Retry-After` header. With the store unreachable, requests pass through
/// unchecked and carry no quota headers at all.
pub async fn layer(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Response {
    let client_id = derive_client_ip(req.headers(), addr.ip());

    match state.rate_limiter.admit(&client_id).await {
        AdmissionDecision::Allowed {
            limit,
            remaining,
            window_seconds,
        } => {
            let mut response = next.run(req).await;
            set_quota_headers(&mut response, limit, remaining, window_seconds);
            response
        }
        AdmissionDecision::Denied {
            limit,
            window_seconds,
        } => {
            let mut response = AppError::too_many_requests(
                format!("Rate limit exceeded. Try again in {window_seconds} seconds."),
                json!({ "limit": limit, "window_seconds": window_seconds }),
            )
            .into_response();
            set_quota_headers(&mut response, limit, 0, window_seconds);
            response
                .headers_mut()
                .insert("retry-after", HeaderValue::from(window_seconds));
            response
        }
        AdmissionDecision::Unenforced => next.run(req).await,
    }
}

fn set_quota_headers(response: &mut Response, limit: u64, remaining: u64, window_seconds: u64) {
    let headers = response.headers_mut();
    headers.insert("x-ratelimit-limit", HeaderValue::from(limit));
    headers.insert("x-ratelimit-remaining", HeaderValue::from(remaining));
    headers.insert("x-ratelimit-window", HeaderValue::from(window_seconds));
}
