// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Distance adapter trait for route-distance lookups (Google Maps, etc.).

use async_trait::async_trait;

use crate::error::EcoPulseError;
use crate::traits::adapter::PluginAdapter;

/// Adapter resolving the travel distance between two free-text locations.
#[async_trait]
pub trait DistanceAdapter: PluginAdapter {
    /// Returns the distance in kilometres between `origin` and `destination`.
    ///
    /// Fails with [`EcoPulseError::ExternalService`] when either location cannot
    /// be resolved or the upstream quota is exhausted.
    async fn distance_km(&self, origin: &str, destination: &str) -> Result<f64, EcoPulseError>;
}
