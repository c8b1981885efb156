//! Integration tests for the docsift REST API
//!
//! Tests the complete end-to-end workflow including upserts,
//! searching, and the admin exclusion workflow.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt as TowerServiceExt;

use crate::common::create_test_services;
use docsift::http;

/// Create a test application over fresh services
fn create_test_app() -> Router {
    http::router(Arc::new(create_test_services()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 100_000)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn admin_post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("X-Admin", "true")
        .header("X-Actor", "admin-user")
        .body(Body::empty())
        .unwrap()
}

fn upsert(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/documents")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn sample_document() -> Value {
    json!({
        "doc_id": "doc-1",
        "title": "sample.pptx",
        "content": "テキストテキストAAAテキスト",
        "thumbnail_url": "/thumb/doc-1",
        "source": "gdrive",
        "page_or_slide": "s3"
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["documents"]["total"], 0);
}

#[tokio::test]
async fn test_upsert_and_search() {
    let app = create_test_app();

    let (status, json) = send(&app, upsert(sample_document())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], true);

    let (status, json) = send(&app, get("/api/search?q=aaa")).await;
    assert_eq!(status, StatusCode::OK);

    let hits = json.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["doc_id"], "doc-1");
    assert_eq!(hits[0]["page_or_slide"], "s3");
    assert_eq!(hits[0]["hit_positions"][0]["start"], 8);
    assert_eq!(hits[0]["hit_positions"][0]["end"], 11);
    assert!(hits[0]["snippet"].as_str().unwrap().contains("[AAA]"));
}

#[tokio::test]
async fn test_search_without_query() {
    let app = create_test_app();
    send(&app, upsert(sample_document())).await;

    let (status, json) = send(&app, get("/api/search")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_search_query_too_long() {
    let app = create_test_app();

    let uri = format!("/api/search?q={}", "x".repeat(501));
    let (status, json) = send(&app, get(&uri)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_upsert_missing_field() {
    let app = create_test_app();

    let (status, json) = send(&app, upsert(json!({"doc_id": "doc-1"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_exclusion_workflow() {
    let app = create_test_app();
    send(&app, upsert(sample_document())).await;

    // Without the admin claim
    let request = Request::builder()
        .method("POST")
        .uri("/api/documents/doc-1/exclude")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, json) = send(&app, admin_post("/api/documents/doc-1/exclude")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], true);

    let (_, json) = send(&app, get("/api/search?q=aaa")).await;
    assert_eq!(json, json!([]));

    let request = Request::builder()
        .uri("/api/documents/excluded")
        .header("X-Admin", "true")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["doc_id"], "doc-1");
    assert_eq!(rows[0]["excluded_by"], "admin-user");

    let (status, _) = send(&app, admin_post("/api/documents/doc-1/include")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = send(&app, get("/api/search?q=aaa")).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_excluded_requires_admin() {
    let app = create_test_app();

    let (status, json) = send(&app, get("/api/documents/excluded")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["status"], 403);
}

#[tokio::test]
async fn test_exclude_missing_document() {
    let app = create_test_app();

    let (status, json) = send(&app, admin_post("/api/documents/missing-id/exclude")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
}
