//! Shared helpers: an app over a fresh in-memory database and a request driver.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use shopfront::{app_router, connect_in_memory, AppState, ServerConfig};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub async fn setup_test_app() -> (Router, SqlitePool) {
    setup_test_app_with(ServerConfig::default()).await
}

pub async fn setup_test_app_with(config: ServerConfig) -> (Router, SqlitePool) {
    let pool = connect_in_memory().await.expect("in-memory pool");
    let app = app_router(AppState::new(pool.clone()), &config);
    (app, pool)
}

/// Send a JSON body with an explicit Content-Length; returns status, content type and decoded body.
pub async fn send_sized(app: &Router, uri: &str, body: String) -> (StatusCode, String, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("Content-Length", body.len())
        .body(Body::from(body))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

/// Send a request and decode the JSON response body.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<String>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(b) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(b)
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body.to_string())).await
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap();
    n
}

/// Create a product over HTTP and return its id.
pub async fn create_product(app: &Router, code: &str) -> i64 {
    let (status, body) = post(
        app,
        "/products",
        serde_json::json!({
            "productCode": code,
            "name": format!("Product {}", code),
            "inventory": 10,
            "price": 2.5,
            "status": "In Stock"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_i64().unwrap()
}
