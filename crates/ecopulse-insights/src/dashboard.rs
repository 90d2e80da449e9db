// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trailing-period dashboard summary.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::debug;

use ecopulse_core::{EcoPulseError, StorageAdapter};

use crate::rounding::{percent, round2};
use crate::trend::{MonthlyPoint, trend_windows};

/// Percentage split of the period total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub travel: u32,
    pub electronics: u32,
}

/// Emission totals for the trailing `period` days plus a six-month trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_emissions: f64,
    pub travel_emissions: f64,
    pub electronics_emissions: f64,
    pub daily_average: f64,
    pub period: u32,
    pub breakdown: Breakdown,
    pub monthly_trend: Vec<MonthlyPoint>,
    pub total_trips: usize,
    pub active_devices: usize,
}

/// Build the dashboard for the `period_days` ending at `today`.
///
/// Electronics emissions apply the current active fleet's daily usage to the
/// whole period and to every trend month.
pub async fn dashboard(
    storage: &dyn StorageAdapter,
    period_days: i64,
    today: NaiveDate,
) -> Result<DashboardSummary, EcoPulseError> {
    let period = u32::try_from(period_days)
        .ok()
        .filter(|p| *p >= 1)
        .ok_or_else(|| EcoPulseError::validation("period must be a positive number of days"))?;

    let since = today.checked_sub_days(Days::new(u64::from(period)));
    let trips = storage.travel_between(since, None).await?;
    let travel: f64 = trips.iter().map(|t| t.emissions).sum();

    let devices = storage.active_devices().await?;
    let daily_rate: f64 = devices.iter().map(|d| d.usage_emissions).sum();
    let electronics = daily_rate * f64::from(period);

    let total = travel + electronics;

    let windows = trend_windows(today)
        .ok_or_else(|| EcoPulseError::Internal(format!("no month windows for {today}")))?;
    let mut monthly_trend = Vec::with_capacity(windows.len());
    for window in windows {
        let month_travel: f64 = storage
            .travel_between(Some(window.start), Some(window.end))
            .await?
            .iter()
            .map(|t| t.emissions)
            .sum();
        let month_electronics = daily_rate * window.days() as f64;
        monthly_trend.push(MonthlyPoint {
            month: window.label(),
            travel: round2(month_travel),
            electronics: round2(month_electronics),
            total: round2(month_travel + month_electronics),
        });
    }

    debug!(period, trips = trips.len(), devices = devices.len(), total, "dashboard computed");

    Ok(DashboardSummary {
        total_emissions: round2(total),
        travel_emissions: round2(travel),
        electronics_emissions: round2(electronics),
        daily_average: round2(total / f64::from(period)),
        period,
        breakdown: Breakdown {
            travel: percent(travel, total),
            electronics: percent(electronics, total),
        },
        monthly_trend,
        total_trips: trips.len(),
        active_devices: devices.len(),
    })
}
