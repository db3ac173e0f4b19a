//! Client identity derivation from request headers.

use std::net::IpAddr;

use axum::http::HeaderMap;

/// Derives the client identity used for rate limiting and creator tracking.
///
/// Precedence order:
///
/// 1. First entry of `X-Forwarded-For` (comma-separated chain), trimmed
/// 2. `X-Real-IP`, trimmed
/// 3. The transport-level peer address
///
/// The derivation is deterministic; requests that resolve to the same
/// identity share one rate-limit quota.
pub fn derive_client_ip(headers: &HeaderMap, peer: IpAddr) -> String {
    if let Some(forwarded) = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
    {
        let first = forwarded.split(',').next().unwrap_or(forwarded).trim();
        if !first.is_empty() {
            return first.to_string();
        }
    }

    if let Some(real_ip) = headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return real_ip.to_string();
    }

    peer.to_string()
}
