// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Emission factor tables.
//!
//! Car:    0.21 kg CO2/km
//! Bus:    0.089 kg CO2/km
//! Train:  0.041 kg CO2/km
//! Flight: 0.255 kg CO2/km
//! Grid electricity: 0.5 kg CO2/kWh

use ecopulse_core::{DeviceType, TransportMode};

/// kg CO2 released per kWh drawn from the grid.
pub const GRID_EMISSION_FACTOR: f64 = 0.5;

/// kg CO2 emitted per kilometre travelled with the given mode.
pub fn transport_factor(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Car => 0.21,
        TransportMode::Bus => 0.089,
        TransportMode::Train => 0.041,
        TransportMode::Flight => 0.255,
    }
}

/// One-time embodied kg CO2 for manufacturing a device of the given type.
pub fn manufacturing_factor(device_type: DeviceType) -> f64 {
    match device_type {
        DeviceType::Laptop => 300.0,
        DeviceType::Desktop => 350.0,
        DeviceType::Phone => 80.0,
        DeviceType::Tablet => 120.0,
        DeviceType::Monitor => 200.0,
        DeviceType::Tv => 400.0,
        DeviceType::Other => 100.0,
    }
}
