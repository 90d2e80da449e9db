// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! API server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get};
use chrono::{NaiveDate, Utc};
use ecopulse_config::model::DashboardConfig;
use ecopulse_core::{DistanceAdapter, EcoPulseError, StorageAdapter};
use ecopulse_recommend::RecommendationGenerator;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Source of "today" for date-windowed aggregates.
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// The current UTC calendar date.
pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Health state for the unauthenticated probe endpoint.
#[derive(Clone)]
pub struct HealthState {
    /// Process start time for uptime calculation.
    pub start_time: std::time::Instant,
}

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub storage: Arc<dyn StorageAdapter>,
    /// `None` when no Maps API key is configured; travel creation then fails.
    pub distance: Option<Arc<dyn DistanceAdapter>>,
    pub recommender: RecommendationGenerator,
    pub dashboard: DashboardConfig,
    pub clock: Clock,
    pub health: HealthState,
}

impl GatewayState {
    pub fn new(
        storage: Arc<dyn StorageAdapter>,
        distance: Option<Arc<dyn DistanceAdapter>>,
        recommender: RecommendationGenerator,
        dashboard: DashboardConfig,
    ) -> Self {
        Self {
            storage,
            distance,
            recommender,
            dashboard,
            clock: Arc::new(utc_today),
            health: HealthState {
                start_time: std::time::Instant::now(),
            },
        }
    }

    /// Replace the clock (tests pin "today").
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }
}

/// Bind address for the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// All routes with CORS and request tracing applied.
pub fn build_router(state: GatewayState) -> Router {
    let api = Router::new()
        .route(
            "/travel",
            get(handlers::travel::list).post(handlers::travel::create),
        )
        .route("/travel/stats", get(handlers::travel::stats))
        .route("/travel/{id}", delete(handlers::travel::remove))
        .route(
            "/electronics",
            get(handlers::electronics::list).post(handlers::electronics::create),
        )
        .route("/electronics/stats", get(handlers::electronics::stats))
        .route(
            "/electronics/{id}",
            delete(handlers::electronics::remove).put(handlers::electronics::update),
        )
        .route("/dashboard", get(handlers::dashboard::summary))
        .route("/recommendations", get(handlers::recommendations::generate));

    Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(handlers::health::get_health))
        .nest("/api", api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serve the API until `shutdown` is cancelled.
pub async fn start_server(
    config: &ServerConfig,
    state: GatewayState,
    shutdown: CancellationToken,
) -> Result<(), EcoPulseError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| EcoPulseError::Internal(format!("failed to bind API server to {addr}: {e}")))?;

    tracing::info!("EcoPulse API listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| EcoPulseError::Internal(format!("API server error: {e}")))?;

    tracing::info!("EcoPulse API stopped");
    Ok(())
}
