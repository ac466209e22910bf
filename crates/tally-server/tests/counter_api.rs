//! Counter endpoints driven in-process with `tower::ServiceExt::oneshot`.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use tally_core::DecrementPolicy;
use tally_server::{app_state::AppState, config::ServerConfig, router::build_router};

fn app(policy: DecrementPolicy) -> Router {
    let mut cfg = ServerConfig::default();
    cfg.counter.decrement_policy = policy;
    build_router(AppState::new(cfg))
}

async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn get(app: &Router) -> i64 {
    let (status, body) = call(app, Method::GET, "/api/counter").await;
    assert_eq!(status, StatusCode::OK);
    body["value"].as_i64().expect("value must be an integer")
}

async fn post(app: &Router, action: &str) -> (StatusCode, Value) {
    call(app, Method::POST, &format!("/api/counter/{action}")).await
}

#[tokio::test]
async fn initial_value_is_zero_after_reset() {
    let app = app(DecrementPolicy::AllowNegative);
    assert_eq!(get(&app).await, 0);

    let (status, body) = post(&app, "reset").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], 0);
    assert_eq!(get(&app).await, 0);
}

#[tokio::test]
async fn increment_adds_one() {
    let app = app(DecrementPolicy::AllowNegative);
    post(&app, "reset").await;
    let initial = get(&app).await;

    let (status, body) = post(&app, "increment").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], initial + 1);
    assert_eq!(get(&app).await, initial + 1);
}

#[tokio::test]
async fn decrement_from_zero_goes_negative() {
    let app = app(DecrementPolicy::AllowNegative);
    post(&app, "reset").await;

    let (status, body) = post(&app, "decrement").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], -1);
}

#[tokio::test]
async fn increment_twice_then_decrement() {
    let app = app(DecrementPolicy::AllowNegative);
    post(&app, "reset").await;
    post(&app, "increment").await;
    post(&app, "increment").await;
    assert_eq!(get(&app).await, 2);

    post(&app, "decrement").await;
    assert_eq!(get(&app).await, 1);
}

#[tokio::test]
async fn every_endpoint_returns_value_or_error() {
    let app = app(DecrementPolicy::AllowNegative);
    let endpoints = [
        (Method::GET, "/api/counter"),
        (Method::POST, "/api/counter/increment"),
        (Method::POST, "/api/counter/decrement"),
        (Method::POST, "/api/counter/reset"),
    ];

    for (method, uri) in endpoints {
        let (status, body) = call(&app, method.clone(), uri).await;
        assert_eq!(status, StatusCode::OK, "{method} {uri} returned {status}");
        assert!(
            body.get("value").is_some() || body.get("error").is_some(),
            "bad json from {method} {uri}: {body}"
        );
    }
}

#[tokio::test]
async fn reject_below_zero_policy_returns_400() {
    let app = app(DecrementPolicy::RejectBelowZero);
    post(&app, "reset").await;

    let (status, body) = post(&app, "decrement").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BELOW_ZERO");
    assert!(body["message"].is_string());
    assert_eq!(get(&app).await, 0);

    post(&app, "increment").await;
    let (status, body) = post(&app, "decrement").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], 0);
}

#[tokio::test]
async fn wrong_method_is_not_allowed() {
    let app = app(DecrementPolicy::AllowNegative);
    let (status, _) = call(&app, Method::GET, "/api/counter/increment").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(get(&app).await, 0);
}

#[tokio::test]
async fn concurrent_increments_are_all_counted() {
    let app = app(DecrementPolicy::AllowNegative);
    let mut tasks = Vec::new();
    for _ in 0..50 {
        let app = app.clone();
        tasks.push(tokio::spawn(async move {
            let (status, _) = post(&app, "increment").await;
            assert_eq!(status, StatusCode::OK);
        }));
    }
    for t in tasks {
        t.await.unwrap();
    }
    assert_eq!(get(&app).await, 50);
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = app(DecrementPolicy::AllowNegative);
    let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");
}
