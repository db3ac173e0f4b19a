mod common;

use std::time::Duration;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use serde_json::json;
use shortling::api::handlers::shorten_handler;
use shortling::domain::repositories::AliasStore;
use shortling::state::AppState;

fn shorten_app(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .layer(common::FakePeerAddr::localhost())
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_generates_five_char_alias() {
    let (state, _store) = common::create_test_state(100, Duration::from_secs(60));
    let server = shorten_app(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://example.com/some/page" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let alias = body["alias"].as_str().unwrap();

    assert_eq!(alias.len(), 5);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["long_url"], "https://example.com/some/page");
    assert_eq!(
        body["short_url"],
        format!("{}/{}", common::TEST_BASE_URL, alias)
    );
}

#[tokio::test]
async fn test_shorten_with_custom_alias() {
    let (state, _store) = common::create_test_state(100, Duration::from_secs(60));
    let server = shorten_app(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com",
            "custom_alias": "my-link_1"
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["alias"], "my-link_1");
    assert_eq!(
        body["short_url"],
        format!("{}/my-link_1", common::TEST_BASE_URL)
    );
}

#[tokio::test]
async fn test_shorten_custom_alias_conflict() {
    let (state, store) = common::create_test_state(100, Duration::from_secs(60));
    let server = shorten_app(state);

    common::create_test_alias(&store, "taken", "https://example.com/first");

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com/second",
            "custom_alias": "taken"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "conflict");

    // The original mapping is untouched
    let record = store.find_by_alias("taken").await.unwrap().unwrap();
    assert_eq!(record.long_url, "https://example.com/first");
}

#[tokio::test]
async fn test_shorten_rejects_invalid_url() {
    let (state, _store) = common::create_test_state(100, Duration::from_secs(60));
    let server = shorten_app(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "not a url" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_rejects_unsupported_scheme() {
    let (state, _store) = common::create_test_state(100, Duration::from_secs(60));
    let server = shorten_app(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "ftp://example.com/file" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_rejects_short_custom_alias() {
    let (state, _store) = common::create_test_state(100, Duration::from_secs(60));
    let server = shorten_app(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com",
            "custom_alias": "ab"
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_rejects_reserved_alias() {
    let (state, _store) = common::create_test_state(100, Duration::from_secs(60));
    let server = shorten_app(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com",
            "custom_alias": "api"
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_blank_custom_alias_generates() {
    let (state, _store) = common::create_test_state(100, Duration::from_secs(60));
    let server = shorten_app(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com",
            "custom_alias": "   "
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["alias"].as_str().unwrap().len(), 5);
}

#[tokio::test]
async fn test_shorten_missing_long_url_field() {
    let (state, _store) = common::create_test_state(100, Duration::from_secs(60));
    let server = shorten_app(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "custom_alias": "my-link" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_shorten_records_creator_ip_from_forwarded_chain() {
    let (state, store) = common::create_test_state(100, Duration::from_secs(60));
    let server = shorten_app(state);

    let response = server
        .post("/api/shorten")
        .add_header("X-Forwarded-For", "1.2.3.4, 5.6.7.8")
        .json(&json!({ "long_url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let alias = response.json::<serde_json::Value>()["alias"]
        .as_str()
        .unwrap()
        .to_string();
    let record = store.find_by_alias(&alias).await.unwrap().unwrap();

    assert_eq!(record.created_by_ip, Some("1.2.3.4".to_string()));
}

#[tokio::test]
async fn test_shorten_applies_default_expiration() {
    let (state, store) = common::create_test_state(100, Duration::from_secs(60));
    let server = shorten_app(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let alias = response.json::<serde_json::Value>()["alias"]
        .as_str()
        .unwrap()
        .to_string();
    let record = store.find_by_alias(&alias).await.unwrap().unwrap();

    let expires_at = record.expires_at.expect("default expiry must be set");
    let days_out = (expires_at - chrono::Utc::now()).num_days();
    assert!((29..=30).contains(&days_out), "expiry {days_out} days out");
}

#[tokio::test]
async fn test_shorten_keeps_caller_expiration() {
    let (state, store) = common::create_test_state(100, Duration::from_secs(60));
    let server = shorten_app(state);

    let expiry = "2027-03-01T12:00:00Z";
    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com",
            "expires_at": expiry
        }))
        .await;

    response.assert_status_ok();

    let alias = response.json::<serde_json::Value>()["alias"]
        .as_str()
        .unwrap()
        .to_string();
    let record = store.find_by_alias(&alias).await.unwrap().unwrap();

    assert_eq!(
        record.expires_at,
        Some(expiry.parse::<chrono::DateTime<chrono::Utc>>().unwrap())
    );
}
