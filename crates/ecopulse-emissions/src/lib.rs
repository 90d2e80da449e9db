// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Emission factors and CO2 calculations for EcoPulse.
//!
//! This crate provides:
//! - **Factors**: kg CO2 per km by transport mode, embodied kg CO2 by device
//!   type, and the grid factor in kg CO2 per kWh
//! - **Calculator**: pure functions turning distances and power draw into kg CO2

pub mod calculator;
pub mod factors;

pub use calculator::{
    daily_usage_emissions, manufacturing_emissions, total_usage_emissions, travel_emissions,
};
pub use factors::{GRID_EMISSION_FACTOR, manufacturing_factor, transport_factor};
