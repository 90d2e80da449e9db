// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Router-level tests against an in-memory store with no external services.

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use ecopulse_config::model::{DashboardConfig, StorageConfig};
use ecopulse_gateway::{GatewayState, build_router};
use ecopulse_recommend::RecommendationGenerator;
use ecopulse_storage::{Database, SqliteStorage};
use serde_json::Value;
use tower::ServiceExt;

async fn router() -> axum::Router {
    let storage = SqliteStorage::from_database(
        StorageConfig::default(),
        Database::open_in_memory().await.unwrap(),
    );
    let state = GatewayState::new(
        Arc::new(storage),
        None,
        RecommendationGenerator::fallback_only(),
        DashboardConfig::default(),
    )
    .with_clock(Arc::new(|| NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()));
    build_router(state)
}

async fn send(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn welcome_and_health() {
    let (status, body) = send(router().await, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to EcoPulse API");

    let (status, body) = send(router().await, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "healthy");
}

#[tokio::test]
async fn travel_without_distance_service_is_500() {
    let app = router().await;
    let (status, body) = send(
        app.clone(),
        "POST",
        "/api/travel",
        Some(serde_json::json!({"origin": "A", "destination": "B", "transportMode": "car"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to add travel entry");

    let (_, body) = send(app, "GET", "/api/travel", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn missing_fields_and_bad_json_are_400() {
    let (status, body) = send(
        router().await,
        "POST",
        "/api/travel",
        Some(serde_json::json!({"origin": "A"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");

    let (status, body) = send(
        router().await,
        "POST",
        "/api/electronics",
        Some(serde_json::json!({"deviceName": "x", "powerConsumption": "lots"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn dashboard_period_bounds() {
    let (status, body) = send(router().await, "GET", "/api/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["period"], 30);
    assert_eq!(body["data"]["monthlyTrend"].as_array().unwrap().len(), 6);

    for uri in [
        "/api/dashboard?period=0",
        "/api/dashboard?period=-3",
        "/api/dashboard?period=abc",
        "/api/dashboard?period=99999",
    ] {
        let (status, _) = send(router().await, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn recommendations_fall_back_without_generator() {
    let (status, body) = send(router().await, "GET", "/api/recommendations", None).await;
    assert_eq!(status, StatusCode::OK);
    let recs = body["data"]["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 5);
    assert_eq!(recs[0], "Consider using public transportation more often");
    assert_eq!(body["data"]["insights"]["totalEmissions"], 0.0);
}

#[tokio::test]
async fn delete_of_unknown_ids_succeeds() {
    let (status, body) = send(router().await, "DELETE", "/api/travel/nope", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Travel entry deleted");

    let (status, body) = send(router().await, "DELETE", "/api/electronics/nope", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Device deleted");
}

#[tokio::test]
async fn update_of_unknown_device_is_404() {
    let (status, body) = send(
        router().await,
        "PUT",
        "/api/electronics/ghost",
        Some(serde_json::json!({"hoursPerDay": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}
