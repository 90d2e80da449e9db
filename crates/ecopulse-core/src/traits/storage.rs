// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage adapter trait for persistence backends (SQLite, etc.).

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::EcoPulseError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{DeviceEntry, TravelEntry};

/// Adapter for the travel and device record stores.
///
/// Records arrive fully derived: the storage layer persists emission fields as
/// given and never recomputes them.
#[async_trait]
pub trait StorageAdapter: PluginAdapter {
    /// Initializes the storage backend (migrations, connection, etc.).
    async fn initialize(&self) -> Result<(), EcoPulseError>;

    /// Closes the storage backend, flushing pending writes.
    async fn close(&self) -> Result<(), EcoPulseError>;

    // --- Travel records ---

    async fn insert_travel(&self, entry: &TravelEntry) -> Result<(), EcoPulseError>;

    /// All travel entries, newest `date` first (ties: newest created first).
    async fn list_travel(&self) -> Result<Vec<TravelEntry>, EcoPulseError>;

    /// Travel entries with `from <= date < until`, in insertion order.
    ///
    /// `None` leaves the corresponding bound open.
    async fn travel_between(
        &self,
        from: Option<NaiveDate>,
        until: Option<NaiveDate>,
    ) -> Result<Vec<TravelEntry>, EcoPulseError>;

    /// Deletes a travel entry. Returns whether a record was removed.
    async fn delete_travel(&self, id: &str) -> Result<bool, EcoPulseError>;

    // --- Device records ---

    async fn insert_device(&self, device: &DeviceEntry) -> Result<(), EcoPulseError>;

    async fn get_device(&self, id: &str) -> Result<Option<DeviceEntry>, EcoPulseError>;

    /// All devices, newest created first.
    async fn list_devices(&self) -> Result<Vec<DeviceEntry>, EcoPulseError>;

    /// Active devices in insertion order.
    async fn active_devices(&self) -> Result<Vec<DeviceEntry>, EcoPulseError>;

    /// Overwrites the mutable fields of an existing device.
    async fn update_device(&self, device: &DeviceEntry) -> Result<(), EcoPulseError>;

    /// Deletes a device. Returns whether a record was removed.
    async fn delete_device(&self, id: &str) -> Result<bool, EcoPulseError>;
}
