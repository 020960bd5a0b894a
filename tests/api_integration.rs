//! Integration tests for the HTTP API

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use numfield::core::create_router;
use numfield::EngineConfig;

fn create_test_router() -> Router {
    create_router(EngineConfig::default()).unwrap()
}

async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["unlocked_inputs"], 0);
}

#[tokio::test]
async fn test_analyze_endpoint() {
    let (status, json) = post_json(create_test_router(), "/analyze", r#"{"text": "13"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["digits"], "13");
    assert_eq!(json["total_score"], 80.0);
    assert_eq!(json["pairs"][0]["category"], "Wealth");
    assert_eq!(json["category_counts"]["Wealth"], 1);
}

#[tokio::test]
async fn test_analyze_missing_text_scores_base() {
    let (status, json) = post_json(create_test_router(), "/analyze", r#"{}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_score"], 60.0);
    assert_eq!(json["pairs"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_analyze_alpha_mode() {
    let (status, json) = post_json(
        create_test_router(),
        "/analyze",
        r#"{"text": "AC-13", "mode": "alpha_to_ordinal"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["digits"], "010313");
}

#[tokio::test]
async fn test_remedy_endpoint() {
    let (status, json) = post_json(
        create_test_router(),
        "/remedy",
        r#"{"digits": "0912345678", "counts": {"Wealth": 0, "Noble": 2, "Career": 1}}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["focus"], "Wealth");
    assert_eq!(json["code"].as_str().unwrap().len(), 10);
    let score = json["inflated_score"].as_f64().unwrap();
    assert!((96.5..=99.8).contains(&score));
}

#[tokio::test]
async fn test_remedy_missing_counts_is_unprocessable() {
    let (status, json) = post_json(
        create_test_router(),
        "/remedy",
        r#"{"digits": "0912345678", "counts": {"Wealth": 0}}"#,
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "INVALID_STATE");
}

#[tokio::test]
async fn test_remedy_non_digits_is_unprocessable() {
    let (status, json) = post_json(
        create_test_router(),
        "/remedy",
        r#"{"digits": "09-12", "counts": {"Wealth": 0, "Noble": 0, "Career": 0}}"#,
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "INVALID_DIGITS");
}

#[tokio::test]
async fn test_report_locked_without_payment() {
    let (status, json) = post_json(create_test_router(), "/report", r#"{"text": "0912345678"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["unlock"]["state"], "LOCKED");
    assert!(json["remedy"].is_null());
    assert!(json["payment_url"].is_string());
    assert_eq!(json["analysis"]["total_score"], 80.0);
}

#[tokio::test]
async fn test_report_unlocked_by_payment_redirect() {
    let (status, json) = post_json(
        create_test_router(),
        "/report",
        r#"{"text": "0912345678", "pay": "success"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["unlock"]["state"], "UNLOCKED");
    assert_eq!(json["unlock"]["remaining_secs"], 900);
    assert_eq!(json["remedy"]["focus"], "Wealth");
    assert!(json["payment_url"].is_null());
}

/// Unlock persists across requests sharing one router
#[tokio::test]
async fn test_unlock_then_report() {
    let app = create_test_router();

    let (status, json) = post_json(app.clone(), "/unlock", r#"{"text": "0912345678"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["unlock"]["state"], "UNLOCKED");

    let (_, json) = post_json(app.clone(), "/report", r#"{"text": "0912345678"}"#).await;
    assert_eq!(json["unlock"]["state"], "UNLOCKED");
    assert!(json["remedy"]["code"].is_string());

    // A different input is still locked
    let (_, json) = post_json(app, "/report", r#"{"text": "13"}"#).await;
    assert_eq!(json["unlock"]["state"], "LOCKED");
}

#[tokio::test]
async fn test_zero_ttl_never_unlocks() {
    let app = create_router(EngineConfig::default().with_unlock_ttl_secs(0)).unwrap();

    let (_, json) = post_json(app, "/report", r#"{"text": "13", "pay": "success"}"#).await;
    assert_eq!(json["unlock"]["state"], "LOCKED");
    assert!(json["remedy"].is_null());
}

#[test]
fn test_out_of_range_ttl_rejected() {
    let err = create_router(EngineConfig::default().with_unlock_ttl_secs(i64::MAX)).unwrap_err();
    assert_eq!(err.code(), "INVALID_CONFIG");
}
