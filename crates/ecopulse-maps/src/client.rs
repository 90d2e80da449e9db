// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Google Distance Matrix API.

use std::time::Duration;

use ecopulse_core::EcoPulseError;
use reqwest::Url;
use tracing::debug;

use crate::types::DistanceMatrixResponse;

const SERVICE: &str = "distance";
const STATUS_OK: &str = "OK";

fn service_error(
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
) -> EcoPulseError {
    EcoPulseError::ExternalService {
        service: SERVICE,
        message,
        source,
    }
}

/// Single origin/destination lookups against Distance Matrix.
#[derive(Debug, Clone)]
pub struct DistanceMatrixClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl DistanceMatrixClient {
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> Result<Self, EcoPulseError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                service_error(
                    format!("failed to build HTTP client: {e}"),
                    Some(Box::new(e)),
                )
            })?;
        Ok(Self {
            client,
            endpoint: format!("{}/maps/api/distancematrix/json", base_url.trim_end_matches('/')),
            api_key,
        })
    }

    /// Driving distance in metres between two free-form locations.
    pub async fn distance_meters(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<f64, EcoPulseError> {
        let url = Url::parse_with_params(
            &self.endpoint,
            &[
                ("origins", origin),
                ("destinations", destination),
                ("key", self.api_key.as_str()),
            ],
        )
        .map_err(|e| EcoPulseError::Config(format!("invalid maps base_url: {e}")))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the API key.
                let e = e.without_url();
                service_error(format!("HTTP request failed: {e}"), Some(Box::new(e)))
            })?;

        let status = response.status();
        debug!(status = %status, "distance matrix response received");
        if !status.is_success() {
            return Err(service_error(format!("API returned {status}"), None));
        }

        let body: DistanceMatrixResponse = response
            .json()
            .await
            .map_err(|e| {
                let e = e.without_url();
                service_error(format!("failed to parse API response: {e}"), Some(Box::new(e)))
            })?;

        if body.status != STATUS_OK {
            let detail = match &body.error_message {
                Some(message) => format!("{}: {message}", body.status),
                None => body.status.clone(),
            };
            return Err(service_error(format!("Distance Matrix request failed ({detail})"), None));
        }

        let element = body
            .first_element()
            .ok_or_else(|| service_error("Distance Matrix returned no elements".into(), None))?;
        if element.status != STATUS_OK {
            return Err(service_error(
                format!("no route between `{origin}` and `{destination}` ({})", element.status),
                None,
            ));
        }
        element
            .distance
            .as_ref()
            .map(|d| d.value)
            .ok_or_else(|| service_error("Distance Matrix element has no distance".into(), None))
    }
}
