// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for EcoPulse.
//!
//! This crate provides the foundational trait definitions, error type, and
//! record types used throughout the workspace. The storage backend and both
//! external collaborators implement traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::EcoPulseError;
pub use types::{
    AdapterType, DeviceEntry, DeviceType, GenerationRequest, HealthStatus, TransportMode,
    TravelEntry,
};

pub use traits::{DistanceAdapter, PluginAdapter, StorageAdapter, TextGenerationAdapter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_type_round_trips_through_display() {
        use std::str::FromStr;

        for variant in [
            AdapterType::Storage,
            AdapterType::Distance,
            AdapterType::TextGeneration,
        ] {
            let s = variant.to_string();
            assert_eq!(AdapterType::from_str(&s).unwrap(), variant);
        }
    }

    #[test]
    fn health_status_variants() {
        let healthy = HealthStatus::Healthy;
        assert_ne!(HealthStatus::Degraded("slow".into()), healthy);
        assert_ne!(HealthStatus::Unhealthy("down".into()), healthy);
    }

    #[test]
    fn all_traits_are_exported() {
        fn _assert_plugin_adapter<T: PluginAdapter>() {}
        fn _assert_storage_adapter<T: StorageAdapter>() {}
        fn _assert_distance_adapter<T: DistanceAdapter>() {}
        fn _assert_generation_adapter<T: TextGenerationAdapter>() {}
    }
}
