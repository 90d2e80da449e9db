// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Presentation rounding shared by every summary.

/// Round to 2 decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Whole-number share of `part` in `total`; 0 when `total` is not positive.
pub fn percent(part: f64, total: f64) -> u32 {
    if total > 0.0 && part.is_finite() {
        (part / total * 100.0).round().max(0.0) as u32
    } else {
        0
    }
}
