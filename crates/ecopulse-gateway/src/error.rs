// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping from domain errors to HTTP responses.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ecopulse_core::EcoPulseError;
use serde::Serialize;
use tracing::error;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// An HTTP error: a status code and the message shown to the client.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Map a domain error, hiding server-side detail behind `context`.
    ///
    /// Client errors keep their own message; everything else is logged and
    /// answered with the per-operation `context` message.
    pub fn from_error(err: EcoPulseError, context: &'static str) -> Self {
        match err {
            EcoPulseError::Validation(message) => Self::bad_request(message),
            EcoPulseError::NotFound { .. } => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            other => {
                error!(error = %other, "{context}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, context)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                success: false,
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400_with_message() {
        let err = ApiError::from_error(
            EcoPulseError::validation("Missing required fields"),
            "Failed to add device",
        );
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Missing required fields");
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from_error(
            EcoPulseError::NotFound {
                kind: "device",
                id: "x".into(),
            },
            "Failed to update device",
        );
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "device not found: x");
    }

    #[test]
    fn server_errors_hide_detail() {
        let err = ApiError::from_error(
            EcoPulseError::Storage {
                source: "disk I/O error".into(),
            },
            "Failed to fetch devices",
        );
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Failed to fetch devices");

        let err = ApiError::from_error(
            EcoPulseError::ExternalService {
                service: "distance",
                message: "NOT_FOUND".into(),
                source: None,
            },
            "Failed to add travel entry",
        );
        assert_eq!(err.message, "Failed to add travel entry");
    }
}
