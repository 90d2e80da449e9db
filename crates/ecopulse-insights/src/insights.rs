// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figures that drive the recommendation prompt.

use serde::Serialize;

use ecopulse_core::{DeviceEntry, EcoPulseError, StorageAdapter, TransportMode, TravelEntry};

use crate::rounding::round2;

/// Fixed usage window for electronics in the recommendation figures.
///
/// Independent of the dashboard period.
pub const INSIGHT_WINDOW_DAYS: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionInsights {
    pub total_emissions: f64,
    pub travel_emissions: f64,
    pub electronics_emissions: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_travel_mode: Option<TransportMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_device: Option<String>,
}

impl EmissionInsights {
    /// `trips` in insertion order; `devices` active only, in insertion order.
    pub fn from_records(trips: &[TravelEntry], devices: &[DeviceEntry]) -> Self {
        let travel: f64 = trips.iter().map(|t| t.emissions).sum();
        let electronics: f64 =
            devices.iter().map(|d| d.usage_emissions).sum::<f64>() * INSIGHT_WINDOW_DAYS;
        Self {
            total_emissions: travel + electronics,
            travel_emissions: travel,
            electronics_emissions: electronics,
            top_travel_mode: top_travel_mode(trips),
            top_device: top_device(devices).map(|d| d.device_name.clone()),
        }
    }

    /// Copy with every figure rounded to 2 decimals.
    pub fn rounded(&self) -> Self {
        Self {
            total_emissions: round2(self.total_emissions),
            travel_emissions: round2(self.travel_emissions),
            electronics_emissions: round2(self.electronics_emissions),
            ..self.clone()
        }
    }
}

/// Most frequent mode; ties go to the mode seen first.
fn top_travel_mode(trips: &[TravelEntry]) -> Option<TransportMode> {
    let mut counts: Vec<(TransportMode, usize)> = Vec::new();
    for trip in trips {
        match counts.iter_mut().find(|(mode, _)| *mode == trip.transport_mode) {
            Some((_, count)) => *count += 1,
            None => counts.push((trip.transport_mode, 1)),
        }
    }
    counts
        .into_iter()
        .fold(None, |best: Option<(TransportMode, usize)>, (mode, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((mode, count)),
        })
        .map(|(mode, _)| mode)
}

/// Highest daily usage; ties go to the earliest device.
fn top_device(devices: &[DeviceEntry]) -> Option<&DeviceEntry> {
    devices.iter().fold(None, |best: Option<&DeviceEntry>, device| match best {
        Some(b) if b.usage_emissions >= device.usage_emissions => best,
        _ => Some(device),
    })
}

/// Unrounded insight figures over all travel and the active fleet.
pub async fn recommendation_insights(
    storage: &dyn StorageAdapter,
) -> Result<EmissionInsights, EcoPulseError> {
    let trips = storage.travel_between(None, None).await?;
    let devices = storage.active_devices().await?;
    Ok(EmissionInsights::from_records(&trips, &devices))
}
