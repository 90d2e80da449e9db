// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for EcoPulse.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a single-writer
//! concurrency model via `tokio-rusqlite`, typed queries for the travel and
//! device tables, and the record services that validate input and derive
//! emission fields before anything is persisted.

pub mod adapter;
pub mod database;
pub mod migrations;
pub mod queries;
pub mod records;

pub use adapter::SqliteStorage;
pub use database::Database;
pub use records::{DevicePatch, NewDevice, NewTravel};
