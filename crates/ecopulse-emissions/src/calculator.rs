// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CO2 calculations over the factor tables.

use ecopulse_core::{DeviceType, TransportMode};

use crate::factors::{GRID_EMISSION_FACTOR, manufacturing_factor, transport_factor};

/// kg CO2 for travelling `distance_km` with `mode`.
pub fn travel_emissions(distance_km: f64, mode: TransportMode) -> f64 {
    distance_km * transport_factor(mode)
}

/// kg CO2 per day for a device drawing `watts` for `hours_per_day` hours.
///
/// Formula: (watts / 1000 * hours) kWh * grid factor.
pub fn daily_usage_emissions(watts: f64, hours_per_day: f64) -> f64 {
    let kwh = (watts / 1000.0) * hours_per_day;
    kwh * GRID_EMISSION_FACTOR
}

/// One-time manufacturing kg CO2 for a device type.
pub fn manufacturing_emissions(device_type: DeviceType) -> f64 {
    manufacturing_factor(device_type)
}

/// kg CO2 for `days` days at a daily rate.
pub fn total_usage_emissions(daily_emissions: f64, days: f64) -> f64 {
    daily_emissions * days
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn hundred_km_by_car_is_21_kg() {
        assert!((travel_emissions(100.0, TransportMode::Car) - 21.0).abs() < EPS);
    }

    #[test]
    fn laptop_at_65w_for_8h() {
        let daily = daily_usage_emissions(65.0, 8.0);
        assert!((daily - 0.26).abs() < EPS);
        assert!((total_usage_emissions(daily, 30.0) - 7.8).abs() < EPS);
    }

    #[test]
    fn zero_power_or_zero_hours_is_zero() {
        assert_eq!(daily_usage_emissions(0.0, 12.0), 0.0);
        assert_eq!(daily_usage_emissions(250.0, 0.0), 0.0);
    }

    #[test]
    fn manufacturing_ignores_everything_but_type() {
        assert_eq!(manufacturing_emissions(DeviceType::Tv), 400.0);
        assert_eq!(manufacturing_emissions(DeviceType::Phone), 80.0);
    }

    fn any_mode() -> impl Strategy<Value = TransportMode> {
        prop::sample::select(TransportMode::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn travel_is_distance_times_factor(d in 0.0f64..50_000.0, mode in any_mode()) {
            let expected = d * transport_factor(mode);
            prop_assert!((travel_emissions(d, mode) - expected).abs() < EPS);
        }

        #[test]
        fn travel_is_monotonic_in_distance(
            a in 0.0f64..10_000.0,
            delta in 0.001f64..10_000.0,
            mode in any_mode(),
        ) {
            prop_assert!(travel_emissions(a + delta, mode) > travel_emissions(a, mode));
        }

        #[test]
        fn usage_is_never_negative(w in 0.0f64..5_000.0, h in 0.0f64..=24.0) {
            prop_assert!(daily_usage_emissions(w, h) >= 0.0);
        }
    }
}
