//! 后端 API 集成测试

mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Json, Router,
};
use clap::Parser;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{setup, spawn_mock, stub_router, StubWeather};
use query_router::infrastructure::web::{create_router, AppState};
use query_router::{AppConfig, Launcher, QueryRouter};

fn app_with(router: QueryRouter) -> Router {
    create_router(Arc::new(AppState { router }))
}

async fn post_ask(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::post("/ask")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = app_with(stub_router(StubWeather::failing(), None));

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json_value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json_value["status"], "ok");
}

#[tokio::test]
async fn test_service_info_endpoint() {
    let app = app_with(stub_router(StubWeather::failing(), None));

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json_value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json_value["version"], query_router::VERSION);
}

#[tokio::test]
async fn test_ask_general_query() {
    let app = app_with(stub_router(StubWeather::failing(), Some("42")));

    let (status, body) = post_ask(app, json!({"query": "Tell me a joke"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], "42");
    assert_eq!(
        body["reasoning"],
        "The user asked a general question, so I used GPT reasoning."
    );
}

#[tokio::test]
async fn test_ask_news_query() {
    let app = app_with(stub_router(StubWeather::failing(), None));

    let (status, body) = post_ask(app, json!({"query": "any news?"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], "News fetching not implemented in this version.");
}

#[tokio::test]
async fn test_ask_weather_failure_returns_500_with_detail() {
    let app = app_with(stub_router(StubWeather::failing(), None));

    let (status, body) = post_ask(app, json!({"query": "weather in Paris"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let detail = body["detail"].as_str().unwrap_or_default();
    assert!(!detail.is_empty());
}

#[tokio::test]
async fn test_ask_rejects_missing_query() {
    let app = app_with(stub_router(StubWeather::failing(), None));

    let (status, _) = post_ask(app, json!({"question": "hi"})).await;

    assert!(status.is_client_error());
}

/// Full stack: real connectors pointed at mock upstream services
#[tokio::test]
async fn test_end_to_end_against_mock_upstreams() {
    setup();
    let upstream = Router::new()
        .route(
            "/data/2.5/weather",
            get(|| async {
                Json(json!({
                    "weather": [{"description": "clear sky"}],
                    "main": {"temp": 20}
                }))
            }),
        )
        .route(
            "/api/rest_v1/page/summary/{slug}",
            get(|| async { (StatusCode::NOT_FOUND, "missing") }),
        );
    let upstream_addr = spawn_mock(upstream).await;
    let base = format!("http://{}", upstream_addr);

    let config = AppConfig::parse_from([
        "test",
        "--openweather-base-url",
        base.as_str(),
        "--wikipedia-base-url",
        base.as_str(),
        "--openweather-api-key",
        "ow-test",
    ]);
    let router = Launcher::with_config(config).build_router().unwrap();
    let addr = spawn_mock(app_with(router)).await;
    let client = reqwest::Client::new();

    let weather: Value = client
        .post(format!("http://{}/ask", addr))
        .json(&json!({"query": "What is the weather in paris today"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(weather["answer"], "It's 20°C and clear sky in Paris today.");

    let response = client
        .post(format!("http://{}/ask", addr))
        .json(&json!({"query": "Who is Nobody Inparticular"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let wiki: Value = response.json().await.unwrap();
    assert_eq!(
        wiki["answer"],
        "Sorry, I couldn't find information on that topic."
    );
}
