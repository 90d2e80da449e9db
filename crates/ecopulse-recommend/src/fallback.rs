// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Served when the generator is unavailable, fails, or replies without a list.
pub const FALLBACK_RECOMMENDATIONS: [&str; 5] = [
    "Consider using public transportation more often",
    "Reduce device usage during off-peak hours",
    "Carpool when possible",
    "Enable power-saving modes on electronics",
    "Plan trips to minimize total distance traveled",
];

pub fn fallback() -> Vec<String> {
    FALLBACK_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect()
}
