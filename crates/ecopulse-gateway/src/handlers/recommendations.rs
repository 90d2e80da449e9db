// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use axum::Json;
use axum::extract::State;
use ecopulse_recommend::RecommendationBundle;

use crate::error::ApiError;
use crate::handlers::{ApiResponse, data};
use crate::server::GatewayState;

/// GET /api/recommendations
///
/// Generator failures are absorbed by the fallback list; only storage errors
/// reach the client.
pub async fn generate(
    State(state): State<GatewayState>,
) -> Result<Json<ApiResponse<RecommendationBundle>>, ApiError> {
    let bundle = state
        .recommender
        .bundle(state.storage.as_ref())
        .await
        .map_err(|e| ApiError::from_error(e, "Failed to generate recommendations"))?;
    Ok(data(bundle))
}
