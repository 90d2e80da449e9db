// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Calendar-month windows for the dashboard trend.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

/// Number of months in the dashboard trend, current month included.
pub const TREND_MONTHS: u32 = 6;

/// One half-open calendar month `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthWindow {
    /// The month `back` months before the one containing `today`.
    pub fn months_before(today: NaiveDate, back: u32) -> Option<Self> {
        let start = today.with_day(1)?.checked_sub_months(Months::new(back))?;
        let end = start.checked_add_months(Months::new(1))?;
        Some(Self { start, end })
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Short label such as `Oct 2026`.
    pub fn label(&self) -> String {
        self.start.format("%b %Y").to_string()
    }
}

/// The trend windows ending with the current month, oldest first.
pub fn trend_windows(today: NaiveDate) -> Option<Vec<MonthWindow>> {
    (0..TREND_MONTHS)
        .rev()
        .map(|back| MonthWindow::months_before(today, back))
        .collect()
}

/// A single month of the dashboard trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub travel: f64,
    pub electronics: f64,
    pub total: f64,
}
