// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the EcoPulse configuration system.

use ecopulse_config::diagnostic::{ConfigError, suggest_key};
use ecopulse_config::model::EcoPulseConfig;
use ecopulse_config::{load_and_validate_str, load_config_from_path, load_config_from_str};
use serial_test::serial;

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_config() {
    let toml = r#"
[server]
host = "0.0.0.0"
port = 8080
log_level = "debug"

[storage]
database_path = "/tmp/ecopulse.db"
wal_mode = false

[dashboard]
default_period_days = 7
max_period_days = 365

[maps]
api_key = "maps-key"
base_url = "http://localhost:9001"
timeout_secs = 5

[openai]
api_key = "sk-test"
model = "gpt-4o-mini"
max_tokens = 300
temperature = 0.2
base_url = "http://localhost:9002"
timeout_secs = 10
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.log_level, "debug");
    assert_eq!(config.storage.database_path, "/tmp/ecopulse.db");
    assert!(!config.storage.wal_mode);
    assert_eq!(config.dashboard.default_period_days, 7);
    assert_eq!(config.dashboard.max_period_days, 365);
    assert_eq!(config.maps.api_key.as_deref(), Some("maps-key"));
    assert_eq!(config.maps.timeout_secs, 5);
    assert_eq!(config.openai.api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.openai.model, "gpt-4o-mini");
    assert_eq!(config.openai.max_tokens, 300);
    assert!((config.openai.temperature - 0.2).abs() < f32::EPSILON);
}

/// Empty TOML yields the compiled defaults.
#[test]
fn empty_toml_yields_defaults() {
    let config = load_config_from_str("").unwrap();
    let defaults = EcoPulseConfig::default();
    assert_eq!(config.server.port, defaults.server.port);
    assert_eq!(config.dashboard.default_period_days, 30);
    assert_eq!(config.openai.model, "gpt-3.5-turbo");
}

/// Unknown field in [server] is reported with a suggestion.
#[test]
fn unknown_field_produces_suggestion() {
    let toml = r#"
[server]
prot = 8080
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    let unknown = errors.iter().find_map(|e| match e {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => Some((key.clone(), suggestion.clone())),
        _ => None,
    });
    let (key, suggestion) = unknown.expect("expected an UnknownKey diagnostic");
    assert_eq!(key, "prot");
    assert_eq!(suggestion.as_deref(), Some("port"));
}

/// A string where a number is expected produces an InvalidType diagnostic.
#[test]
fn wrong_type_produces_invalid_type() {
    let toml = r#"
[server]
port = "eighty"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject wrong type");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("port"))),
        "got: {errors:?}"
    );
}

/// Semantic validation runs after successful deserialization.
#[test]
fn validation_errors_surface_through_load_and_validate() {
    let toml = r#"
[dashboard]
default_period_days = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("period 0 is invalid");
    assert!(errors.iter().any(|e| matches!(e, ConfigError::Validation { .. })));
}

/// Environment variables override file values using the section mapping.
#[test]
#[serial]
fn env_overrides_file_values() {
    let dir = std::env::temp_dir().join("ecopulse-config-env-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("ecopulse.toml");
    std::fs::write(&path, "[server]\nport = 7000\n").unwrap();

    // SAFETY: tests touching the environment are serialized.
    unsafe {
        std::env::set_var("ECOPULSE_SERVER_PORT", "7100");
        std::env::set_var("ECOPULSE_STORAGE_DATABASE_PATH", "/tmp/env.db");
    }
    let config = load_config_from_path(&path);
    unsafe {
        std::env::remove_var("ECOPULSE_SERVER_PORT");
        std::env::remove_var("ECOPULSE_STORAGE_DATABASE_PATH");
    }

    let config = config.unwrap();
    assert_eq!(config.server.port, 7100);
    assert_eq!(config.storage.database_path, "/tmp/env.db");
}

/// Multi-word field names in every section survive the env mapping.
#[test]
#[serial]
fn env_overrides_reach_multi_word_fields() {
    let dir = std::env::temp_dir().join("ecopulse-config-env-fields-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("ecopulse.toml");
    std::fs::write(&path, "").unwrap();

    // SAFETY: tests touching the environment are serialized.
    unsafe {
        std::env::set_var("ECOPULSE_DASHBOARD_DEFAULT_PERIOD_DAYS", "7");
        std::env::set_var("ECOPULSE_OPENAI_MAX_TOKENS", "250");
        std::env::set_var("ECOPULSE_MAPS_API_KEY", "maps-key");
        std::env::set_var("ECOPULSE_SERVER_LOG_LEVEL", "debug");
    }
    let config = load_config_from_path(&path);
    unsafe {
        std::env::remove_var("ECOPULSE_DASHBOARD_DEFAULT_PERIOD_DAYS");
        std::env::remove_var("ECOPULSE_OPENAI_MAX_TOKENS");
        std::env::remove_var("ECOPULSE_MAPS_API_KEY");
        std::env::remove_var("ECOPULSE_SERVER_LOG_LEVEL");
    }

    let config = config.unwrap();
    assert_eq!(config.dashboard.default_period_days, 7);
    assert_eq!(config.openai.max_tokens, 250);
    assert_eq!(config.maps.api_key.as_deref(), Some("maps-key"));
    assert_eq!(config.server.log_level, "debug");
}

#[test]
fn suggestion_helper_handles_section_keys() {
    let valid = &["default_period_days", "max_period_days"];
    assert_eq!(
        suggest_key("default_perod_days", valid),
        Some("default_period_days".to_string())
    );
}
