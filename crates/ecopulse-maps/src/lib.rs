// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Distance Matrix adapter for EcoPulse.
//!
//! Implements [`DistanceAdapter`]: one origin, one destination, kilometres
//! rounded to 2 decimals.
//! API key resolution order: config -> `GOOGLE_MAPS_API_KEY` env var -> error.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use ecopulse_config::model::MapsConfig;
use ecopulse_core::{AdapterType, DistanceAdapter, EcoPulseError, HealthStatus, PluginAdapter};
use tracing::{debug, info};

use crate::client::DistanceMatrixClient;

/// Environment variable consulted when the config carries no key.
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

pub struct GoogleDistance {
    client: DistanceMatrixClient,
}

impl GoogleDistance {
    pub fn new(config: &MapsConfig) -> Result<Self, EcoPulseError> {
        let api_key = resolve_api_key(&config.api_key)?;
        let client = DistanceMatrixClient::new(
            api_key,
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
        )?;
        info!(base_url = %config.base_url, "Google distance adapter initialized");
        Ok(Self { client })
    }
}

#[async_trait]
impl PluginAdapter for GoogleDistance {
    fn name(&self) -> &str {
        "google-distance-matrix"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Distance
    }

    async fn health_check(&self) -> Result<HealthStatus, EcoPulseError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), EcoPulseError> {
        debug!("Google distance adapter shutting down");
        Ok(())
    }
}

#[async_trait]
impl DistanceAdapter for GoogleDistance {
    async fn distance_km(&self, origin: &str, destination: &str) -> Result<f64, EcoPulseError> {
        let meters = self.client.distance_meters(origin, destination).await?;
        let km = meters_to_km(meters);
        debug!(origin, destination, km, "distance resolved");
        Ok(km)
    }
}

/// Metres to kilometres, rounded to 2 decimals.
pub fn meters_to_km(meters: f64) -> f64 {
    (meters / 1000.0 * 100.0).round() / 100.0
}

/// Resolve the API key: non-empty config value first, then the environment.
pub fn resolve_api_key(config_key: &Option<String>) -> Result<String, EcoPulseError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.clone());
    }

    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            EcoPulseError::Config(format!(
                "Google Maps API key not found. Set maps.api_key in config or {API_KEY_ENV} environment variable."
            ))
        })
}
