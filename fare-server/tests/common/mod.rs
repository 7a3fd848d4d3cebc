#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use fare_server::db::DbService;
use fare_server::{Config, ServerState, build_app};
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const MEMORY_URL: &str = "sqlite::memory:";

/// App over an empty store (schema only)
pub async fn empty_app() -> Router {
    let db = DbService::in_memory().await.unwrap();
    let state = ServerState::new(Config::for_database(MEMORY_URL), db.pool);
    build_app(&state).with_state(state)
}

/// App over a store with the default zones and fares
pub async fn seeded_app() -> Router {
    let state = ServerState::initialize(&Config::for_database(MEMORY_URL))
        .await
        .unwrap();
    build_app(&state).with_state(state)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn json_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// Submit a URL-encoded form the way the admin page does
///
/// Returns the status and the `Location` header, if any.
pub async fn post_form(app: &Router, uri: &str, body: &str) -> (StatusCode, Option<String>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_owned());
    (response.status(), location)
}
