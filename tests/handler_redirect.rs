mod common;

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;
use shortenme::application::services::ClickTracking;
use shortenme::domain::entities::ShortCodeRecord;
use shortenme::domain::repositories::RecordStore;
use shortenme::infrastructure::store::MemoryRecordStore;
use std::sync::Arc;

#[tokio::test]
async fn test_redirect_success() {
    let (server, store) = common::memory_server();

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/landing" }))
        .await
        .assert_status_ok();

    let response = server.get("/1").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/landing");

    let record = store.get("1").await.unwrap().unwrap();
    assert_eq!(record.click_count, 1);
}

#[tokio::test]
async fn test_redirect_counts_every_resolution() {
    let (server, _store) = common::memory_server();

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .assert_status_ok();

    for _ in 0..3 {
        server
            .get("/1")
            .await
            .assert_status(StatusCode::TEMPORARY_REDIRECT);
    }

    let response = server.get("/api/click-counts/1").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["click_count"], 3);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _store) = common::memory_server();

    let response = server.get("/zz").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["code"], "zz");
}

#[tokio::test]
async fn test_redirect_non_canonical_code() {
    let (server, store) = common::memory_server();
    store
        .put("1", ShortCodeRecord::new("https://example.com".into(), Utc::now()))
        .await
        .unwrap();

    // "01" decodes to the same id as "1" but is never issued
    server.get("/01").await.assert_status(StatusCode::NOT_FOUND);
    server.get("/url_counter").await.assert_status(StatusCode::NOT_FOUND);

    let record = store.get("1").await.unwrap().unwrap();
    assert_eq!(record.click_count, 0);
}

#[tokio::test]
async fn test_redirect_best_effort_survives_click_failure() {
    let store = Arc::new(common::ReadOnlyStore {
        inner: MemoryRecordStore::new(),
    });
    store
        .put("1", ShortCodeRecord::new("https://example.com".into(), Utc::now()))
        .await
        .unwrap();

    let server = common::server_with(store, ClickTracking::BestEffort);

    let response = server.get("/1").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_strict_fails_on_click_failure() {
    let store = Arc::new(common::ReadOnlyStore {
        inner: MemoryRecordStore::new(),
    });
    store
        .put("1", ShortCodeRecord::new("https://example.com".into(), Utc::now()))
        .await
        .unwrap();

    let server = common::server_with(store, ClickTracking::Strict);

    server
        .get("/1")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_redirect_store_unavailable() {
    let server = common::server_with(Arc::new(common::UnavailableStore), ClickTracking::BestEffort);

    server
        .get("/abc")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}
