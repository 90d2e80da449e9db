// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for EcoPulse integration tests.
//!
//! Provides mock adapters and an in-process API harness for fast,
//! deterministic tests without Google Maps or OpenAI.
//!
//! # Components
//!
//! - [`MockDistance`] - distance adapter with scripted routes
//! - [`MockGenerator`] - text generator with queued replies
//! - [`TestHarness`] - temp SQLite store plus the full router

pub mod harness;
pub mod mock_distance;
pub mod mock_generator;

pub use harness::{TestHarness, TestHarnessBuilder};
pub use mock_distance::MockDistance;
pub use mock_generator::MockGenerator;
