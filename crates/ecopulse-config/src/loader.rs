// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./ecopulse.toml` > `~/.config/ecopulse/ecopulse.toml` > `/etc/ecopulse/ecopulse.toml`
//! with environment variable overrides via `ECOPULSE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::EcoPulseConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/ecopulse/ecopulse.toml";

/// Local configuration file, relative to the working directory.
pub const LOCAL_CONFIG_FILE: &str = "ecopulse.toml";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/ecopulse/ecopulse.toml` (system-wide)
/// 3. `~/.config/ecopulse/ecopulse.toml` (user XDG config)
/// 4. `./ecopulse.toml` (local directory)
/// 5. `ECOPULSE_*` environment variables
pub fn load_config() -> Result<EcoPulseConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<EcoPulseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(EcoPulseConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<EcoPulseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(EcoPulseConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(EcoPulseConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// `~/.config/ecopulse/ecopulse.toml`, if a config dir exists on this platform.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("ecopulse").join(LOCAL_CONFIG_FILE))
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `ECOPULSE_STORAGE_DATABASE_PATH` must map to
/// `storage.database_path`, not `storage.database.path`. Keys keep the
/// variable's original case, so they are lowercased before matching.
fn env_provider() -> Env {
    Env::prefixed("ECOPULSE_").map(|key| {
        let mapped = key
            .as_str()
            .to_ascii_lowercase()
            .replacen("server_", "server.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("dashboard_", "dashboard.", 1)
            .replacen("maps_", "maps.", 1)
            .replacen("openai_", "openai.", 1);
        mapped.into()
    })
}
