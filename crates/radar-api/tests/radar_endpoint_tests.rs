#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests for the HTTP boundary, driven in-process.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use tower::ServiceExt;

use radar_api::router;

async fn post_radar(body: Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri("/radar")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    router().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_radar_closest_enemies() {
    let response = post_radar(json!({
        "protocols": ["closest-enemies"],
        "scan": [
            {"coordinates": {"x": 0, "y": 100}, "enemies": {"type": "mech", "number": 1}, "allies": 2},
            {"coordinates": {"x": 50, "y": 50}, "enemies": {"type": "tank", "number": 1}, "allies": null},
            {"coordinates": {"x": 100, "y": 0}, "enemies": {"type": "mech", "number": 1}, "allies": 5}
        ]
    }))
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(json_body(response).await, json!({"x": 50, "y": 50}));
}

#[tokio::test]
async fn test_radar_prioritize_mech() {
    let response = post_radar(json!({
        "protocols": ["prioritize-mech"],
        "scan": [
            {"coordinates": {"x": 0, "y": 40}, "enemies": {"type": "soldier", "number": 10}},
            {"coordinates": {"x": 0, "y": 80}, "enemies": {"type": "mech", "number": 1}, "allies": 5}
        ]
    }))
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"x": 0, "y": 80}));
}

#[tokio::test]
async fn test_no_valid_targets_is_unprocessable() {
    let response = post_radar(json!({
        "protocols": [],
        "scan": [{"coordinates": {"x": 101, "y": 0}, "enemies": {"type": "soldier", "number": 3}}]
    }))
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["code"], "ERR_NO_VALID_TARGETS");
    assert!(body["request_id"].is_string());
}

#[tokio::test]
async fn test_empty_scan_is_unprocessable() {
    let response = post_radar(json!({"protocols": ["avoid-mech"], "scan": []})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await["code"], "ERR_NO_VALID_TARGETS");
}

#[tokio::test]
async fn test_unknown_protocol_rejected() {
    let response = post_radar(json!({
        "protocols": ["hold-fire"],
        "scan": [{"coordinates": {"x": 1, "y": 1}, "enemies": {"type": "tank", "number": 1}}]
    }))
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["code"], "ERR_UNKNOWN_PROTOCOL");
    assert_eq!(body["field"], "protocols");
}

#[tokio::test]
async fn test_negative_allies_rejected() {
    let response = post_radar(json!({
        "protocols": [],
        "scan": [{"coordinates": {"x": 1, "y": 1}, "enemies": {"type": "tank", "number": 1}, "allies": -1}]
    }))
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["code"], "ERR_NEGATIVE_COUNT");
    assert_eq!(body["field"], "allies");
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let response = post_radar(json!({
        "protocols": ["closest-enemies"],
        "scan": [{"coordinates": {"x": "far", "y": 1}, "enemies": {"type": "tank", "number": 1}}]
    }))
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await["code"], "ERR_INVALID_INPUT");
}

#[tokio::test]
async fn test_inbound_request_id_is_echoed() {
    let request = Request::builder()
        .method("POST")
        .uri("/radar")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-request-id", "upstream-123")
        .header("x-trace-id", "trace-abc")
        .body(Body::from(
            json!({"protocols": [], "scan": []}).to_string(),
        ))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "upstream-123");
    let body = json_body(response).await;
    assert_eq!(body["request_id"], "upstream-123");
    assert_eq!(body["trace_id"], "trace-abc");
}

#[tokio::test]
async fn test_generated_request_id_matches_error_body() {
    let response = post_radar(json!({"protocols": ["hold-fire"], "scan": []})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let header_id = response.headers()["x-request-id"]
        .to_str()
        .unwrap()
        .to_string();
    assert!(!header_id.is_empty());
    let body = json_body(response).await;
    assert_eq!(body["request_id"], header_id.as_str());
    assert!(body.get("trace_id").is_none());
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"OK");
}
