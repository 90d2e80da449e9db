// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end API testing.
//!
//! `TestHarness` assembles the full router over a temp SQLite database with
//! mock collaborators, and drives it in-process via `tower::ServiceExt`.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use ecopulse_config::model::{DashboardConfig, StorageConfig};
use ecopulse_core::{DistanceAdapter, EcoPulseError, StorageAdapter, TextGenerationAdapter};
use ecopulse_gateway::{GatewayState, build_router};
use ecopulse_recommend::RecommendationGenerator;
use ecopulse_storage::SqliteStorage;
use serde_json::Value;
use tower::ServiceExt;

use crate::mock_distance::MockDistance;
use crate::mock_generator::MockGenerator;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    distance: Option<MockDistance>,
    generator: Option<MockGenerator>,
    today: NaiveDate,
    dashboard: DashboardConfig,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            distance: Some(MockDistance::fixed(100.0)),
            generator: None,
            today: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap_or_default(),
            dashboard: DashboardConfig::default(),
        }
    }

    /// Replace the distance adapter (default: every route is 100 km).
    pub fn with_distance(mut self, distance: MockDistance) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Run without a distance adapter, as when no Maps key is configured.
    pub fn without_distance(mut self) -> Self {
        self.distance = None;
        self
    }

    /// Attach a text generator (default: none, fallback recommendations only).
    pub fn with_generator(mut self, generator: MockGenerator) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Pin the date the API treats as today.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_dashboard(mut self, dashboard: DashboardConfig) -> Self {
        self.dashboard = dashboard;
        self
    }

    pub async fn build(self) -> Result<TestHarness, EcoPulseError> {
        let temp_dir =
            tempfile::TempDir::new().map_err(|e| EcoPulseError::Storage { source: e.into() })?;
        let db_path = temp_dir.path().join("test.db");

        let storage = Arc::new(SqliteStorage::new(StorageConfig {
            database_path: db_path.to_string_lossy().to_string(),
            wal_mode: true,
        }));
        storage.initialize().await?;

        let today = self.today;
        let distance = self.distance.map(Arc::new);
        let generator = self.generator.map(Arc::new);

        let state = GatewayState::new(
            storage.clone(),
            distance.clone().map(|d| d as Arc<dyn DistanceAdapter>),
            RecommendationGenerator::new(
                generator
                    .clone()
                    .map(|g| g as Arc<dyn TextGenerationAdapter>),
            ),
            self.dashboard,
        )
        .with_clock(Arc::new(move || today));

        Ok(TestHarness {
            router: build_router(state),
            storage,
            distance,
            generator,
            _temp_dir: temp_dir,
        })
    }
}

/// A complete API stack for integration tests.
pub struct TestHarness {
    router: Router,
    pub storage: Arc<SqliteStorage>,
    pub distance: Option<Arc<MockDistance>>,
    pub generator: Option<Arc<MockGenerator>>,
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Harness with default mocks.
    pub async fn new() -> Result<Self, EcoPulseError> {
        Self::builder().build().await
    }

    /// Send one request and decode the JSON response body (`Null` when empty).
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value), EcoPulseError> {
        let internal = |e: String| EcoPulseError::Internal(e);

        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .map_err(|e| internal(e.to_string()))?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| internal(e.to_string()))?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| internal(e.to_string()))?;
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|e| internal(e.to_string()))?
        };
        Ok((status, json))
    }

    pub async fn get(&self, uri: &str) -> Result<(StatusCode, Value), EcoPulseError> {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> Result<(StatusCode, Value), EcoPulseError> {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> Result<(StatusCode, Value), EcoPulseError> {
        self.request("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> Result<(StatusCode, Value), EcoPulseError> {
        self.request("DELETE", uri, None).await
    }
}
