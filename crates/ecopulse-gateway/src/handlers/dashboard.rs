// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use ecopulse_insights::{DashboardSummary, dashboard};
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::{ApiResponse, data};
use crate::server::GatewayState;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub period: Option<i64>,
}

/// GET /api/dashboard?period=N
pub async fn summary(
    State(state): State<GatewayState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<DashboardSummary>>, ApiError> {
    let Query(query) = query?;
    let period = query
        .period
        .unwrap_or_else(|| i64::from(state.dashboard.default_period_days));
    let max = i64::from(state.dashboard.max_period_days);
    if period > max {
        return Err(ApiError::bad_request(format!(
            "period must not exceed {max} days"
        )));
    }

    let summary = dashboard(state.storage.as_ref(), period, state.today())
        .await
        .map_err(|e| ApiError::from_error(e, "Failed to fetch dashboard data"))?;
    Ok(data(summary))
}
