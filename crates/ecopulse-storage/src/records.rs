// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record services: validate incoming payloads, derive emission fields, persist.
//!
//! The HTTP layer hands raw request bodies to these functions so that every
//! entry point (API, tests, future importers) shares one set of rules.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::{debug, info};

use ecopulse_core::{
    DeviceEntry, DeviceType, DistanceAdapter, EcoPulseError, StorageAdapter, TransportMode,
    TravelEntry,
};
use ecopulse_emissions::{daily_usage_emissions, manufacturing_emissions, travel_emissions};

const MISSING_FIELDS: &str = "Missing required fields";

/// Body of a travel creation request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTravel {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub transport_mode: Option<String>,
    /// `YYYY-MM-DD`; blank or absent means today.
    pub date: Option<String>,
}

/// Body of a device creation request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDevice {
    pub device_name: Option<String>,
    pub device_type: Option<String>,
    pub power_consumption: Option<f64>,
    pub hours_per_day: Option<f64>,
    pub purchase_date: Option<String>,
}

/// Partial device update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePatch {
    pub device_name: Option<String>,
    pub device_type: Option<String>,
    pub power_consumption: Option<f64>,
    pub hours_per_day: Option<f64>,
    pub purchase_date: Option<String>,
    pub active: Option<bool>,
}

fn required(value: Option<String>) -> Result<String, EcoPulseError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(EcoPulseError::validation(MISSING_FIELDS)),
    }
}

fn parse_mode(raw: &str) -> Result<TransportMode, EcoPulseError> {
    raw.parse().map_err(|_| {
        EcoPulseError::validation(format!(
            "Invalid transport mode `{raw}`; expected one of car, bus, train, flight"
        ))
    })
}

fn parse_device_type(raw: &str) -> Result<DeviceType, EcoPulseError> {
    raw.parse().map_err(|_| {
        EcoPulseError::validation(format!(
            "Invalid device type `{raw}`; expected one of laptop, desktop, phone, tablet, monitor, tv, other"
        ))
    })
}

fn parse_date(raw: Option<&str>, today: NaiveDate) -> Result<NaiveDate, EcoPulseError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(today),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            EcoPulseError::validation(format!("Invalid date `{s}`; expected YYYY-MM-DD"))
        }),
    }
}

fn check_power(watts: f64) -> Result<f64, EcoPulseError> {
    if watts.is_finite() && watts > 0.0 {
        Ok(watts)
    } else {
        Err(EcoPulseError::validation("powerConsumption must be greater than 0"))
    }
}

fn check_hours(hours: f64) -> Result<f64, EcoPulseError> {
    if hours.is_finite() && (0.0..=24.0).contains(&hours) {
        Ok(hours)
    } else {
        Err(EcoPulseError::validation("hoursPerDay must be between 0 and 24"))
    }
}

/// Validate, look up the distance, derive emissions and persist a travel entry.
///
/// Nothing is written when the distance lookup fails.
pub async fn create_travel(
    storage: &dyn StorageAdapter,
    distance: Option<&dyn DistanceAdapter>,
    input: NewTravel,
    today: NaiveDate,
) -> Result<TravelEntry, EcoPulseError> {
    let origin = required(input.origin)?;
    let destination = required(input.destination)?;
    let mode = parse_mode(&required(input.transport_mode)?)?;
    let date = parse_date(input.date.as_deref(), today)?;

    let distance = distance.ok_or_else(|| EcoPulseError::ExternalService {
        service: "distance",
        message: "distance service is not configured".into(),
        source: None,
    })?;
    let km = distance.distance_km(&origin, &destination).await?;
    if !km.is_finite() || km < 0.0 {
        return Err(EcoPulseError::ExternalService {
            service: "distance",
            message: format!("implausible distance {km}"),
            source: None,
        });
    }

    let entry = TravelEntry {
        id: uuid::Uuid::new_v4().to_string(),
        origin,
        destination,
        distance: km,
        transport_mode: mode,
        emissions: travel_emissions(km, mode),
        date,
        created_at: Utc::now(),
    };
    storage.insert_travel(&entry).await?;
    info!(id = %entry.id, mode = %mode, km, emissions = entry.emissions, "travel entry added");
    Ok(entry)
}

/// Validate, derive emissions and persist a new device.
pub async fn create_device(
    storage: &dyn StorageAdapter,
    input: NewDevice,
    today: NaiveDate,
) -> Result<DeviceEntry, EcoPulseError> {
    let device_name = required(input.device_name)?;
    let device_type = parse_device_type(&required(input.device_type)?)?;
    let (Some(power), Some(hours)) = (input.power_consumption, input.hours_per_day) else {
        return Err(EcoPulseError::validation(MISSING_FIELDS));
    };
    let power = check_power(power)?;
    let hours = check_hours(hours)?;
    let purchase_date = parse_date(input.purchase_date.as_deref(), today)?;

    let device = DeviceEntry {
        id: uuid::Uuid::new_v4().to_string(),
        device_name,
        device_type,
        power_consumption: power,
        hours_per_day: hours,
        manufacturing_emissions: manufacturing_emissions(device_type),
        usage_emissions: daily_usage_emissions(power, hours),
        purchase_date,
        active: true,
        created_at: Utc::now(),
    };
    storage.insert_device(&device).await?;
    info!(id = %device.id, device_type = %device_type, "device added");
    Ok(device)
}

/// Apply a partial update to an existing device.
///
/// Supplying power or hours recomputes the daily usage emissions from the
/// merged values; supplying a device type recomputes manufacturing emissions.
pub async fn update_device(
    storage: &dyn StorageAdapter,
    id: &str,
    patch: DevicePatch,
) -> Result<DeviceEntry, EcoPulseError> {
    let mut device = storage
        .get_device(id)
        .await?
        .ok_or_else(|| EcoPulseError::NotFound {
            kind: "device",
            id: id.to_string(),
        })?;

    if let Some(name) = patch.device_name {
        if name.trim().is_empty() {
            return Err(EcoPulseError::validation("deviceName must not be blank"));
        }
        device.device_name = name.trim().to_string();
    }
    if let Some(raw) = patch.device_type {
        device.device_type = parse_device_type(raw.trim())?;
        device.manufacturing_emissions = manufacturing_emissions(device.device_type);
    }
    let usage_changed = patch.power_consumption.is_some() || patch.hours_per_day.is_some();
    if let Some(watts) = patch.power_consumption {
        device.power_consumption = check_power(watts)?;
    }
    if let Some(hours) = patch.hours_per_day {
        device.hours_per_day = check_hours(hours)?;
    }
    if usage_changed {
        device.usage_emissions =
            daily_usage_emissions(device.power_consumption, device.hours_per_day);
    }
    if let Some(raw) = patch.purchase_date.as_deref() {
        device.purchase_date = parse_date(Some(raw), device.purchase_date)?;
    }
    if let Some(active) = patch.active {
        device.active = active;
    }

    storage.update_device(&device).await?;
    debug!(id, usage_changed, "device updated");
    Ok(device)
}

/// Delete a travel entry; absent ids are not an error.
pub async fn delete_travel(storage: &dyn StorageAdapter, id: &str) -> Result<(), EcoPulseError> {
    let removed = storage.delete_travel(id).await?;
    debug!(id, removed, "travel entry delete");
    Ok(())
}

/// Delete a device; absent ids are not an error.
pub async fn delete_device(storage: &dyn StorageAdapter, id: &str) -> Result<(), EcoPulseError> {
    let removed = storage.delete_device(id).await?;
    debug!(id, removed, "device delete");
    Ok(())
}
