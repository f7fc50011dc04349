//! Helpers for driving the router in-process

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use onboard_server::{Config, ServerState, build_app};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Fresh app with an empty store
pub fn app() -> Router {
    let state = ServerState::initialize(&Config::with_overrides(0, false)).unwrap();
    build_app().with_state(state)
}

/// App seeded with the demo customers (0 Anna, 1 Lloyd, 2 Niko)
pub fn demo_app() -> Router {
    let state = ServerState::initialize(&Config::with_overrides(0, true)).unwrap();
    build_app().with_state(state)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

pub fn customer_json(id: u64, name: &str, country: &str) -> Value {
    json!({
        "id": id,
        "full_name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "business_name": format!("{name}'s Kitchen"),
        "num_locations": 1,
        "phone": "+34 600 123 456",
        "role": "owner",
        "country": country
    })
}

pub fn location_json(name: &str) -> Value {
    json!({
        "name": name,
        "address": format!("{name} street 1"),
        "postcode": "28013",
        "country": "Spain"
    })
}

pub fn business_json(legal_id: &str, customer_id: u64) -> Value {
    json!({
        "legal_id": legal_id,
        "customer_id": customer_id,
        "name": "Tapas Bar",
        "locations": [location_json("Centro")]
    })
}
