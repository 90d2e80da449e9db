// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as valid bind addresses, non-empty paths, and sane numeric ranges.

use crate::diagnostic::ConfigError;
use crate::model::EcoPulseConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &EcoPulseConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.dashboard.default_period_days == 0 {
        errors.push(ConfigError::Validation {
            message: "dashboard.default_period_days must be at least 1".to_string(),
        });
    }

    if config.dashboard.default_period_days > config.dashboard.max_period_days {
        errors.push(ConfigError::Validation {
            message: format!(
                "dashboard.default_period_days ({}) exceeds dashboard.max_period_days ({})",
                config.dashboard.default_period_days, config.dashboard.max_period_days
            ),
        });
    }

    for (section, url) in [
        ("maps.base_url", &config.maps.base_url),
        ("openai.base_url", &config.openai.base_url),
    ] {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(ConfigError::Validation {
                message: format!("{section} must be an http(s) URL, got `{url}`"),
            });
        }
    }

    if !(0.0..=2.0).contains(&config.openai.temperature) {
        errors.push(ConfigError::Validation {
            message: format!(
                "openai.temperature must be between 0 and 2, got {}",
                config.openai.temperature
            ),
        });
    }

    if config.openai.max_tokens == 0 {
        errors.push(ConfigError::Validation {
            message: "openai.max_tokens must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_error(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        let config = EcoPulseConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_database_path_fails_validation() {
        let mut config = EcoPulseConfig::default();
        config.storage.database_path = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "database_path"));
    }

    #[test]
    fn zero_default_period_fails_validation() {
        let mut config = EcoPulseConfig::default();
        config.dashboard.default_period_days = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "default_period_days"));
    }

    #[test]
    fn default_period_above_max_fails_validation() {
        let mut config = EcoPulseConfig::default();
        config.dashboard.default_period_days = 90;
        config.dashboard.max_period_days = 60;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "exceeds"));
    }

    #[test]
    fn non_http_base_url_fails_validation() {
        let mut config = EcoPulseConfig::default();
        config.maps.base_url = "maps.googleapis.com".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "maps.base_url"));
    }

    #[test]
    fn errors_are_collected_not_fail_fast() {
        let mut config = EcoPulseConfig::default();
        config.server.host = " ".to_string();
        config.openai.temperature = 5.0;
        config.openai.max_tokens = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn valid_custom_config_passes() {
        let mut config = EcoPulseConfig::default();
        config.server.host = "0.0.0.0".to_string();
        config.server.port = 8080;
        config.storage.database_path = "/tmp/ecopulse-test.db".to_string();
        config.openai.base_url = "http://localhost:9000".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
