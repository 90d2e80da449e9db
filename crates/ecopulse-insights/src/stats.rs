// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-mode travel statistics and per-type electronics statistics.
//!
//! Figures are left unrounded; clients format them.

use std::collections::BTreeMap;

use serde::Serialize;

use ecopulse_core::{DeviceEntry, EcoPulseError, StorageAdapter, TravelEntry};

const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModeStats {
    pub count: usize,
    pub emissions: f64,
    pub distance: f64,
}

/// Totals over every travel entry, grouped by transport mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelStats {
    pub total_emissions: f64,
    pub total_distance: f64,
    pub total_trips: usize,
    /// Only modes with at least one trip appear.
    pub by_mode: BTreeMap<String, ModeStats>,
}

impl TravelStats {
    pub fn from_entries(entries: &[TravelEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut stats, entry| {
            stats.total_emissions += entry.emissions;
            stats.total_distance += entry.distance;
            stats.total_trips += 1;
            let mode = stats
                .by_mode
                .entry(entry.transport_mode.to_string())
                .or_default();
            mode.count += 1;
            mode.emissions += entry.emissions;
            mode.distance += entry.distance;
            stats
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStats {
    pub count: usize,
    pub manufacturing_emissions: f64,
    pub daily_usage_emissions: f64,
}

/// Totals over the active device fleet, grouped by device type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectronicsStats {
    pub total_manufacturing_emissions: f64,
    pub daily_usage_emissions: f64,
    pub monthly_usage_emissions: f64,
    pub yearly_usage_emissions: f64,
    pub total_devices: usize,
    pub by_type: BTreeMap<String, TypeStats>,
}

impl ElectronicsStats {
    /// Callers pass active devices only.
    pub fn from_devices(devices: &[DeviceEntry]) -> Self {
        let mut stats = devices.iter().fold(Self::default(), |mut stats, device| {
            stats.total_manufacturing_emissions += device.manufacturing_emissions;
            stats.daily_usage_emissions += device.usage_emissions;
            stats.total_devices += 1;
            let by_type = stats
                .by_type
                .entry(device.device_type.to_string())
                .or_default();
            by_type.count += 1;
            by_type.manufacturing_emissions += device.manufacturing_emissions;
            by_type.daily_usage_emissions += device.usage_emissions;
            stats
        });
        stats.monthly_usage_emissions = stats.daily_usage_emissions * DAYS_PER_MONTH;
        stats.yearly_usage_emissions = stats.daily_usage_emissions * DAYS_PER_YEAR;
        stats
    }
}

/// Statistics over all travel entries.
pub async fn travel_stats(storage: &dyn StorageAdapter) -> Result<TravelStats, EcoPulseError> {
    let entries = storage.travel_between(None, None).await?;
    Ok(TravelStats::from_entries(&entries))
}

/// Statistics over active devices.
pub async fn electronics_stats(
    storage: &dyn StorageAdapter,
) -> Result<ElectronicsStats, EcoPulseError> {
    let devices = storage.active_devices().await?;
    Ok(ElectronicsStats::from_devices(&devices))
}
