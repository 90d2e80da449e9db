// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `ecopulse serve` command implementation.
//!
//! Opens the SQLite store, wires the Google distance and OpenAI adapters
//! when their keys are available, and serves the API until SIGINT/SIGTERM.

use std::sync::Arc;

use ecopulse_config::EcoPulseConfig;
use ecopulse_config::model::{MapsConfig, OpenAiConfig};
use ecopulse_core::{
    DistanceAdapter, EcoPulseError, PluginAdapter, StorageAdapter, TextGenerationAdapter,
};
use ecopulse_gateway::{GatewayState, ServerConfig, start_server};
use ecopulse_maps::GoogleDistance;
use ecopulse_openai::OpenAiGenerator;
use ecopulse_recommend::RecommendationGenerator;
use ecopulse_storage::SqliteStorage;
use tracing::{info, warn};

use crate::shutdown;

/// Runs the `ecopulse serve` command.
pub async fn run_serve(config: EcoPulseConfig) -> Result<(), EcoPulseError> {
    init_tracing(&config.server.log_level);

    info!(version = env!("CARGO_PKG_VERSION"), "starting ecopulse serve");

    let storage = Arc::new(SqliteStorage::new(config.storage.clone()));
    storage.initialize().await?;

    let distance = build_distance(&config.maps);
    let generator = build_generator(&config.openai);

    let state = GatewayState::new(
        storage.clone(),
        distance,
        RecommendationGenerator::new(generator),
        config.dashboard.clone(),
    );

    let cancel = shutdown::install_signal_handler();
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    let result = start_server(&server_config, state, cancel.clone()).await;
    cancel.cancel();

    close_storage(&storage).await;
    info!("ecopulse stopped");
    result
}

/// Checkpoint and release the store; failures are logged, not returned.
async fn close_storage(storage: &SqliteStorage) {
    if let Err(e) = storage.shutdown().await {
        warn!(error = %e, "storage shutdown failed");
    }
}

/// Google distance adapter, or `None` when no key is available.
fn build_distance(config: &MapsConfig) -> Option<Arc<dyn DistanceAdapter>> {
    match GoogleDistance::new(config) {
        Ok(adapter) => Some(Arc::new(adapter)),
        Err(e) => {
            warn!(error = %e, "distance lookups disabled, travel entries cannot be created");
            None
        }
    }
}

/// OpenAI generator, or `None` so recommendations use the fallback list.
fn build_generator(config: &OpenAiConfig) -> Option<Arc<dyn TextGenerationAdapter>> {
    match OpenAiGenerator::new(config) {
        Ok(adapter) => Some(Arc::new(adapter)),
        Err(e) => {
            warn!(error = %e, "text generation disabled, serving fallback recommendations");
            None
        }
    }
}

/// Initializes the tracing subscriber with an env filter.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("ecopulse={log_level},tower_http={log_level},warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
