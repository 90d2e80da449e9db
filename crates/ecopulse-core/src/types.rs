// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record types and common types shared across EcoPulse crates.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of adapter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Storage,
    Distance,
    TextGeneration,
}

/// Mode of transport for a travel entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransportMode {
    Car,
    Bus,
    Train,
    Flight,
}

impl TransportMode {
    /// Every transport mode, in declaration order.
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Car,
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::Flight,
    ];
}

/// Category of an electronic device.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeviceType {
    Laptop,
    Desktop,
    Phone,
    Tablet,
    Monitor,
    Tv,
    Other,
}

impl DeviceType {
    /// Every device type, in declaration order.
    pub const ALL: [DeviceType; 7] = [
        DeviceType::Laptop,
        DeviceType::Desktop,
        DeviceType::Phone,
        DeviceType::Tablet,
        DeviceType::Monitor,
        DeviceType::Tv,
        DeviceType::Other,
    ];
}

/// A single logged trip.
///
/// `emissions` is always `distance * factor[transport_mode]`; entries are never
/// updated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelEntry {
    /// Unique record identifier (UUID v4), serialized as `_id`.
    #[serde(rename = "_id")]
    pub id: String,
    pub origin: String,
    pub destination: String,
    /// Distance in kilometres, as reported by the distance service.
    pub distance: f64,
    pub transport_mode: TransportMode,
    /// kg CO2 for the whole trip.
    pub emissions: f64,
    /// Calendar date the trip took place.
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A tracked electronic device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceEntry {
    /// Unique record identifier (UUID v4), serialized as `_id`.
    #[serde(rename = "_id")]
    pub id: String,
    pub device_name: String,
    pub device_type: DeviceType,
    /// Power draw in watts.
    pub power_consumption: f64,
    /// Average hours of use per day (0-24).
    pub hours_per_day: f64,
    /// One-time embodied kg CO2 for the device type.
    pub manufacturing_emissions: f64,
    /// kg CO2 per day of use.
    pub usage_emissions: f64,
    pub purchase_date: NaiveDate,
    /// Inactive devices are excluded from every aggregate.
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// A request to a text-generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// System role instruction.
    pub system: String,
    /// User prompt.
    pub prompt: String,
}
