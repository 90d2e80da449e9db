// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock distance adapter for deterministic testing.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use ecopulse_core::{AdapterType, DistanceAdapter, EcoPulseError, HealthStatus, PluginAdapter};

/// Distance adapter answering from a fixed route table.
///
/// Unknown routes resolve to the default distance, or fail when no default is
/// set, the way an unresolvable address would.
pub struct MockDistance {
    routes: HashMap<(String, String), f64>,
    default_km: Option<f64>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockDistance {
    /// Every route resolves to `km`.
    pub fn fixed(km: f64) -> Self {
        Self {
            routes: HashMap::new(),
            default_km: Some(km),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every lookup fails.
    pub fn failing() -> Self {
        Self {
            routes: HashMap::new(),
            default_km: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Add a specific route.
    pub fn with_route(mut self, origin: &str, destination: &str, km: f64) -> Self {
        self.routes
            .insert((origin.to_string(), destination.to_string()), km);
        self
    }

    /// Lookups performed so far, in order.
    pub async fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl PluginAdapter for MockDistance {
    fn name(&self) -> &str {
        "mock-distance"
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
        Ok(())
    }
}

#[async_trait]
impl DistanceAdapter for MockDistance {
    async fn distance_km(&self, origin: &str, destination: &str) -> Result<f64, EcoPulseError> {
        self.calls
            .lock()
            .await
            .push((origin.to_string(), destination.to_string()));
        self.routes
            .get(&(origin.to_string(), destination.to_string()))
            .copied()
            .or(self.default_km)
            .ok_or_else(|| EcoPulseError::ExternalService {
                service: "distance",
                message: format!("no route between `{origin}` and `{destination}` (NOT_FOUND)"),
                source: None,
            })
    }
}
