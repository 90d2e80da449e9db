// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Travel entry operations.

use chrono::NaiveDate;
use ecopulse_core::{EcoPulseError, TravelEntry};
use rusqlite::params;

use crate::database::{Database, map_tr_err};
use crate::queries::parse_text;

const COLUMNS: &str =
    "id, origin, destination, distance, transport_mode, emissions, date, created_at";

fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<TravelEntry> {
    Ok(TravelEntry {
        id: row.get(0)?,
        origin: row.get(1)?,
        destination: row.get(2)?,
        distance: row.get(3)?,
        transport_mode: parse_text(4, row.get(4)?)?,
        emissions: row.get(5)?,
        date: row.get(6)?,
        created_at: row.get(7)?,
    })
}

/// Insert a fully derived travel entry.
pub async fn insert_travel(db: &Database, entry: &TravelEntry) -> Result<(), EcoPulseError> {
    let entry = entry.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO travel_entries
                 (id, origin, destination, distance, transport_mode, emissions, date, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    entry.id,
                    entry.origin,
                    entry.destination,
                    entry.distance,
                    entry.transport_mode.to_string(),
                    entry.emissions,
                    entry.date,
                    entry.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// All travel entries, most recent trip date first.
pub async fn list_travel(db: &Database) -> Result<Vec<TravelEntry>, EcoPulseError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM travel_entries
                 ORDER BY date DESC, created_at DESC, rowid DESC"
            ))?;
            let rows = stmt.query_map([], from_row)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()
        })
        .await
        .map_err(map_tr_err)
}

/// Travel entries with `from <= date < until`, oldest insert first.
pub async fn travel_between(
    db: &Database,
    from: Option<NaiveDate>,
    until: Option<NaiveDate>,
) -> Result<Vec<TravelEntry>, EcoPulseError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM travel_entries
                 WHERE (?1 IS NULL OR date >= ?1) AND (?2 IS NULL OR date < ?2)
                 ORDER BY rowid ASC"
            ))?;
            let rows = stmt.query_map(params![from, until], from_row)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()
        })
        .await
        .map_err(map_tr_err)
}

/// Delete a travel entry. Returns `false` when nothing matched.
pub async fn delete_travel(db: &Database, id: &str) -> Result<bool, EcoPulseError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let changed = conn.execute("DELETE FROM travel_entries WHERE id = ?1", params![id])?;
            Ok(changed > 0)
        })
        .await
        .map_err(map_tr_err)
}
