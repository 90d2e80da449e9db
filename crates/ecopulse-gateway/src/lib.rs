// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP API for EcoPulse.
//!
//! Exposes the travel and electronics record stores, the dashboard and
//! statistics aggregates, and recommendations as a JSON REST API under
//! `/api`, plus `/` and `/health` for probes.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{
    Clock, GatewayState, HealthState, ServerConfig, build_router, start_server, utc_today,
};
