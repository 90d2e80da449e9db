// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the StorageAdapter trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::OnceCell;
use tracing::debug;

use ecopulse_config::model::StorageConfig;
use ecopulse_core::{
    AdapterType, DeviceEntry, EcoPulseError, HealthStatus, PluginAdapter, StorageAdapter,
    TravelEntry,
};

use crate::database::{Database, map_tr_err};
use crate::queries;

/// SQLite-backed record store.
///
/// The database is opened on the first call to [`StorageAdapter::initialize`]
/// and shared by every request afterwards.
pub struct SqliteStorage {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStorage {
    /// Create a new SqliteStorage with the given configuration.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Wrap an already opened database (used by tests and the in-memory harness).
    pub fn from_database(config: StorageConfig, db: Database) -> Self {
        Self {
            config,
            db: OnceCell::new_with(Some(db)),
        }
    }

    fn db(&self) -> Result<&Database, EcoPulseError> {
        self.db.get().ok_or_else(|| EcoPulseError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl PluginAdapter for SqliteStorage {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, EcoPulseError> {
        let Ok(db) = self.db() else {
            return Ok(HealthStatus::Unhealthy("not initialized".into()));
        };
        db.connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), EcoPulseError> {
        if self.db.get().is_some() {
            self.close().await?;
        }
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for SqliteStorage {
    async fn initialize(&self) -> Result<(), EcoPulseError> {
        let path = self.config.database_path.clone();
        let db = Database::open_with(&path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| EcoPulseError::Storage {
            source: "storage already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite storage initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), EcoPulseError> {
        self.db()?.checkpoint().await?;
        debug!("WAL checkpoint complete");
        Ok(())
    }

    async fn insert_travel(&self, entry: &TravelEntry) -> Result<(), EcoPulseError> {
        queries::travel::insert_travel(self.db()?, entry).await
    }

    async fn list_travel(&self) -> Result<Vec<TravelEntry>, EcoPulseError> {
        queries::travel::list_travel(self.db()?).await
    }

    async fn travel_between(
        &self,
        from: Option<NaiveDate>,
        until: Option<NaiveDate>,
    ) -> Result<Vec<TravelEntry>, EcoPulseError> {
        queries::travel::travel_between(self.db()?, from, until).await
    }

    async fn delete_travel(&self, id: &str) -> Result<bool, EcoPulseError> {
        queries::travel::delete_travel(self.db()?, id).await
    }

    async fn insert_device(&self, device: &DeviceEntry) -> Result<(), EcoPulseError> {
        queries::devices::insert_device(self.db()?, device).await
    }

    async fn get_device(&self, id: &str) -> Result<Option<DeviceEntry>, EcoPulseError> {
        queries::devices::get_device(self.db()?, id).await
    }

    async fn list_devices(&self) -> Result<Vec<DeviceEntry>, EcoPulseError> {
        queries::devices::list_devices(self.db()?, false).await
    }

    async fn active_devices(&self) -> Result<Vec<DeviceEntry>, EcoPulseError> {
        queries::devices::list_devices(self.db()?, true).await
    }

    async fn update_device(&self, device: &DeviceEntry) -> Result<(), EcoPulseError> {
        if queries::devices::update_device(self.db()?, device).await? {
            Ok(())
        } else {
            Err(EcoPulseError::NotFound {
                kind: "device",
                id: device.id.clone(),
            })
        }
    }

    async fn delete_device(&self, id: &str) -> Result<bool, EcoPulseError> {
        queries::devices::delete_device(self.db()?, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config_at(path: &std::path::Path) -> StorageConfig {
        StorageConfig {
            database_path: path.to_string_lossy().into_owned(),
            wal_mode: true,
        }
    }

    #[tokio::test]
    async fn queries_fail_before_initialize() {
        let dir = tempdir().unwrap();
        let storage = SqliteStorage::new(config_at(&dir.path().join("x.db")));
        let err = storage.list_travel().await.unwrap_err();
        assert!(err.to_string().contains("not initialized"));
        assert_eq!(
            storage.health_check().await.unwrap(),
            HealthStatus::Unhealthy("not initialized".into())
        );
    }

    #[tokio::test]
    async fn initialize_twice_is_an_error() {
        let dir = tempdir().unwrap();
        let storage = SqliteStorage::new(config_at(&dir.path().join("x.db")));
        storage.initialize().await.unwrap();
        assert!(storage.initialize().await.is_err());
        assert_eq!(storage.health_check().await.unwrap(), HealthStatus::Healthy);
        storage.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn update_of_missing_device_is_not_found() {
        let db = Database::open_in_memory().await.unwrap();
        let storage = SqliteStorage::from_database(StorageConfig::default(), db);
        let device = DeviceEntry {
            id: "nope".into(),
            device_name: "Phone".into(),
            device_type: ecopulse_core::DeviceType::Phone,
            power_consumption: 5.0,
            hours_per_day: 3.0,
            manufacturing_emissions: 80.0,
            usage_emissions: 0.0075,
            purchase_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            active: true,
            created_at: chrono::Utc::now(),
        };
        let err = storage.update_device(&device).await.unwrap_err();
        assert!(matches!(err, EcoPulseError::NotFound { kind: "device", .. }));
    }

    #[test]
    fn adapter_identity() {
        let storage = SqliteStorage::new(StorageConfig::default());
        assert_eq!(storage.name(), "sqlite");
        assert_eq!(storage.adapter_type(), AdapterType::Storage);
    }
}
