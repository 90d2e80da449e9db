// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/api/electronics` handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use ecopulse_core::DeviceEntry;
use ecopulse_insights::{ElectronicsStats, electronics_stats};
use ecopulse_storage::{DevicePatch, NewDevice, records};

use crate::error::ApiError;
use crate::handlers::{ApiResponse, data, message};
use crate::server::GatewayState;

/// POST /api/electronics
pub async fn create(
    State(state): State<GatewayState>,
    payload: Result<Json<NewDevice>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<DeviceEntry>>), ApiError> {
    let Json(body) = payload?;
    let device = records::create_device(state.storage.as_ref(), body, state.today())
        .await
        .map_err(|e| ApiError::from_error(e, "Failed to add device"))?;
    Ok((StatusCode::CREATED, data(device)))
}

/// GET /api/electronics
pub async fn list(
    State(state): State<GatewayState>,
) -> Result<Json<ApiResponse<Vec<DeviceEntry>>>, ApiError> {
    let devices = state
        .storage
        .list_devices()
        .await
        .map_err(|e| ApiError::from_error(e, "Failed to fetch devices"))?;
    Ok(data(devices))
}

/// GET /api/electronics/stats
pub async fn stats(
    State(state): State<GatewayState>,
) -> Result<Json<ApiResponse<ElectronicsStats>>, ApiError> {
    let stats = electronics_stats(state.storage.as_ref())
        .await
        .map_err(|e| ApiError::from_error(e, "Failed to fetch electronics statistics"))?;
    Ok(data(stats))
}

/// PUT /api/electronics/{id}
pub async fn update(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
    payload: Result<Json<DevicePatch>, JsonRejection>,
) -> Result<Json<ApiResponse<DeviceEntry>>, ApiError> {
    let Json(patch) = payload?;
    let device = records::update_device(state.storage.as_ref(), &id, patch)
        .await
        .map_err(|e| ApiError::from_error(e, "Failed to update device"))?;
    Ok(data(device))
}

/// DELETE /api/electronics/{id}
pub async fn remove(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    records::delete_device(state.storage.as_ref(), &id)
        .await
        .map_err(|e| ApiError::from_error(e, "Failed to delete device"))?;
    Ok(message("Device deleted"))
}
