// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Device CRUD operations.

use ecopulse_core::{DeviceEntry, EcoPulseError};
use rusqlite::params;

use crate::database::{Database, map_tr_err};
use crate::queries::parse_text;

const COLUMNS: &str = "id, device_name, device_type, power_consumption, hours_per_day, \
     manufacturing_emissions, usage_emissions, purchase_date, active, created_at";

fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<DeviceEntry> {
    Ok(DeviceEntry {
        id: row.get(0)?,
        device_name: row.get(1)?,
        device_type: parse_text(2, row.get(2)?)?,
        power_consumption: row.get(3)?,
        hours_per_day: row.get(4)?,
        manufacturing_emissions: row.get(5)?,
        usage_emissions: row.get(6)?,
        purchase_date: row.get(7)?,
        active: row.get(8)?,
        created_at: row.get(9)?,
    })
}

/// Insert a fully derived device record.
pub async fn insert_device(db: &Database, device: &DeviceEntry) -> Result<(), EcoPulseError> {
    let device = device.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                &format!(
                    "INSERT INTO devices ({COLUMNS}) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
                ),
                params![
                    device.id,
                    device.device_name,
                    device.device_type.to_string(),
                    device.power_consumption,
                    device.hours_per_day,
                    device.manufacturing_emissions,
                    device.usage_emissions,
                    device.purchase_date,
                    device.active,
                    device.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Get a device by ID.
pub async fn get_device(db: &Database, id: &str) -> Result<Option<DeviceEntry>, EcoPulseError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM devices WHERE id = ?1"))?;
            match stmt.query_row(params![id], from_row) {
                Ok(device) => Ok(Some(device)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// List devices, optionally restricted to active ones.
///
/// The full listing is newest first; the active-only listing keeps insertion
/// order so aggregates see devices the way they were added.
pub async fn list_devices(
    db: &Database,
    active_only: bool,
) -> Result<Vec<DeviceEntry>, EcoPulseError> {
    db.connection()
        .call(move |conn| {
            let sql = if active_only {
                format!("SELECT {COLUMNS} FROM devices WHERE active = 1 ORDER BY rowid ASC")
            } else {
                format!("SELECT {COLUMNS} FROM devices ORDER BY created_at DESC, rowid DESC")
            };
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([], from_row)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()
        })
        .await
        .map_err(map_tr_err)
}

/// Overwrite the mutable fields of a device. Returns `false` when the id is unknown.
pub async fn update_device(db: &Database, device: &DeviceEntry) -> Result<bool, EcoPulseError> {
    let device = device.clone();
    db.connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE devices SET device_name = ?2, device_type = ?3, power_consumption = ?4,
                 hours_per_day = ?5, manufacturing_emissions = ?6, usage_emissions = ?7,
                 purchase_date = ?8, active = ?9
                 WHERE id = ?1",
                params![
                    device.id,
                    device.device_name,
                    device.device_type.to_string(),
                    device.power_consumption,
                    device.hours_per_day,
                    device.manufacturing_emissions,
                    device.usage_emissions,
                    device.purchase_date,
                    device.active,
                ],
            )?;
            Ok(changed > 0)
        })
        .await
        .map_err(map_tr_err)
}

/// Delete a device. Returns `false` when nothing matched.
pub async fn delete_device(db: &Database, id: &str) -> Result<bool, EcoPulseError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let changed = conn.execute("DELETE FROM devices WHERE id = ?1", params![id])?;
            Ok(changed > 0)
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use ecopulse_core::DeviceType;

    fn device(id: &str, active: bool, created_secs: i64) -> DeviceEntry {
        DeviceEntry {
            id: id.into(),
            device_name: format!("{id} device"),
            device_type: DeviceType::Laptop,
            power_consumption: 65.0,
            hours_per_day: 8.0,
            manufacturing_emissions: 300.0,
            usage_emissions: 0.26,
            purchase_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            active,
            created_at: Utc.timestamp_opt(1_790_000_000 + created_secs, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn insert_and_get_round_trips() {
        let db = Database::open_in_memory().await.unwrap();
        let original = device("d1", true, 0);
        insert_device(&db, &original).await.unwrap();
        assert_eq!(get_device(&db, "d1").await.unwrap(), Some(original));
        assert_eq!(get_device(&db, "missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn listing_orders_and_filters() {
        let db = Database::open_in_memory().await.unwrap();
        insert_device(&db, &device("a", true, 0)).await.unwrap();
        insert_device(&db, &device("b", false, 10)).await.unwrap();
        insert_device(&db, &device("c", true, 20)).await.unwrap();

        let all: Vec<String> = list_devices(&db, false)
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(all, vec!["c", "b", "a"]);

        let active: Vec<String> = list_devices(&db, true)
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(active, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn update_overwrites_mutable_fields() {
        let db = Database::open_in_memory().await.unwrap();
        let mut d = device("d1", true, 0);
        insert_device(&db, &d).await.unwrap();

        d.device_type = DeviceType::Monitor;
        d.manufacturing_emissions = 200.0;
        d.active = false;
        assert!(update_device(&db, &d).await.unwrap());

        let stored = get_device(&db, "d1").await.unwrap().unwrap();
        assert_eq!(stored.device_type, DeviceType::Monitor);
        assert_eq!(stored.manufacturing_emissions, 200.0);
        assert!(!stored.active);
    }

    #[tokio::test]
    async fn update_of_unknown_device_reports_false() {
        let db = Database::open_in_memory().await.unwrap();
        assert!(!update_device(&db, &device("ghost", true, 0)).await.unwrap());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let db = Database::open_in_memory().await.unwrap();
        insert_device(&db, &device("d1", true, 0)).await.unwrap();
        assert!(delete_device(&db, "d1").await.unwrap());
        assert!(!delete_device(&db, "d1").await.unwrap());
    }
}
