// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aggregation engine for EcoPulse.
//!
//! Everything here is read-only over the record stores: the dashboard summary
//! with its six-month trend, per-mode and per-type statistics, and the
//! insight figures the recommendation generator feeds into its prompt.
//! The current date is always passed in so results are reproducible.

pub mod dashboard;
pub mod insights;
pub mod rounding;
pub mod stats;
pub mod trend;

pub use dashboard::{DashboardSummary, dashboard};
pub use insights::{EmissionInsights, recommendation_insights};
pub use stats::{ElectronicsStats, TravelStats, electronics_stats, travel_stats};
pub use trend::MonthlyPoint;
