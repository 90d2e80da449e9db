// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use ecopulse_core::HealthStatus;
use serde::Serialize;

use crate::server::GatewayState;

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when storage is unhealthy.
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub storage: String,
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> (StatusCode, Json<HealthResponse>) {
    let storage = match state.storage.health_check().await {
        Ok(HealthStatus::Healthy) => Ok("healthy".to_string()),
        Ok(HealthStatus::Degraded(reason)) => Ok(format!("degraded: {reason}")),
        Ok(HealthStatus::Unhealthy(reason)) => Err(format!("unhealthy: {reason}")),
        Err(e) => Err(format!("unhealthy: {e}")),
    };
    let (code, status, storage) = match storage {
        Ok(s) => (StatusCode::OK, "ok", s),
        Err(s) => (StatusCode::SERVICE_UNAVAILABLE, "degraded", s),
    };
    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_secs: state.health.start_time.elapsed().as_secs(),
            storage,
        }),
    )
}
