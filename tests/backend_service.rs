//! End-to-end tests for the backend service.

use serde_json::Value;

mod common;

#[tokio::test]
async fn test_health_returns_ok() {
    let backend = common::start_backend("be-health").await;

    let res = common::client().get(backend.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_info_returns_backend_host() {
    let backend = common::start_backend("be-7f9c2").await;

    let res = common::client().get(backend.url("/info")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));

    let body: Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "backend_host": "be-7f9c2" }));
}

#[tokio::test]
async fn test_info_only_answers_get() {
    let backend = common::start_backend("be-methods").await;

    let res = common::client().post(backend.url("/info")).send().await.unwrap();
    assert_eq!(res.status(), 405);
}
