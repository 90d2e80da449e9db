// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for EcoPulse.

use thiserror::Error;

/// The primary error type used across all EcoPulse adapter traits and services.
#[derive(Debug, Error)]
pub enum EcoPulseError {
    /// Configuration errors (invalid TOML, missing API keys, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// A request field is missing or invalid.
    #[error("{0}")]
    Validation(String),

    /// The addressed record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Storage backend errors (database connection, query failure, migrations).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An external collaborator (distance lookup, text generation) failed.
    #[error("{service} error: {message}")]
    ExternalService {
        service: &'static str,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl EcoPulseError {
    /// Shorthand for a [`EcoPulseError::Validation`] error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns true when the error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound { .. })
    }
}
