// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/api/travel` handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use ecopulse_core::TravelEntry;
use ecopulse_insights::{TravelStats, travel_stats};
use ecopulse_storage::{NewTravel, records};

use crate::error::ApiError;
use crate::handlers::{ApiResponse, data, message};
use crate::server::GatewayState;

/// POST /api/travel
pub async fn create(
    State(state): State<GatewayState>,
    payload: Result<Json<NewTravel>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<TravelEntry>>), ApiError> {
    let Json(body) = payload?;
    let entry = records::create_travel(
        state.storage.as_ref(),
        state.distance.as_deref(),
        body,
        state.today(),
    )
    .await
    .map_err(|e| ApiError::from_error(e, "Failed to add travel entry"))?;
    Ok((StatusCode::CREATED, data(entry)))
}

/// GET /api/travel
pub async fn list(
    State(state): State<GatewayState>,
) -> Result<Json<ApiResponse<Vec<TravelEntry>>>, ApiError> {
    let entries = state
        .storage
        .list_travel()
        .await
        .map_err(|e| ApiError::from_error(e, "Failed to fetch travel entries"))?;
    Ok(data(entries))
}

/// GET /api/travel/stats
pub async fn stats(
    State(state): State<GatewayState>,
) -> Result<Json<ApiResponse<TravelStats>>, ApiError> {
    let stats = travel_stats(state.storage.as_ref())
        .await
        .map_err(|e| ApiError::from_error(e, "Failed to fetch travel statistics"))?;
    Ok(data(stats))
}

/// DELETE /api/travel/{id}
pub async fn remove(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    records::delete_travel(state.storage.as_ref(), &id)
        .await
        .map_err(|e| ApiError::from_error(e, "Failed to delete travel entry"))?;
    Ok(message("Travel entry deleted"))
}
