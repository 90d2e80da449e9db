// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the OpenAI Chat Completions API.

use std::time::Duration;

use ecopulse_core::EcoPulseError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{ApiErrorResponse, ChatRequest, ChatResponse};

const SERVICE: &str = "openai";

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

/// Bearer-authenticated Chat Completions client. One attempt per call.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    endpoint: String,
}

impl OpenAiClient {
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self, EcoPulseError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| {
                EcoPulseError::Config(format!("invalid OpenAI API key header value: {e}"))
            })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
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
            endpoint: format!("{}/v1/chat/completions", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a completion request and return the decoded response.
    pub async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, EcoPulseError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| service_error(format!("HTTP request failed: {e}"), Some(Box::new(e))))?;

        let status = response.status();
        debug!(status = %status, model = %request.model, "completion response received");

        let body = response
            .text()
            .await
            .map_err(|e| {
                service_error(
                    format!("failed to read response body: {e}"),
                    Some(Box::new(e)),
                )
            })?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => format!(
                    "OpenAI API error ({}): {}",
                    api_err.error.type_.as_deref().unwrap_or("unknown"),
                    api_err.error.message
                ),
                Err(_) => format!("API returned {status}: {body}"),
            };
            return Err(service_error(message, None));
        }

        serde_json::from_str(&body).map_err(|e| {
            service_error(
                format!("failed to parse API response: {e}"),
                Some(Box::new(e)),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> OpenAiClient {
        OpenAiClient::new("sk-test", base_url, Duration::from_secs(5)).unwrap()
    }

    fn test_request() -> ChatRequest {
        ChatRequest {
            model: "gpt-3.5-turbo".into(),
            messages: vec![ChatMessage::user("Hello")],
            max_tokens: 500,
            temperature: 0.7,
        }
    }

    #[test]
    fn endpoint_joins_base_url() {
        let client = test_client("https://api.openai.com/");
        assert_eq!(client.endpoint(), "https://api.openai.com/v1/chat/completions");
    }

    #[tokio::test]
    async fn complete_success_sends_bearer_auth() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(
                serde_json::json!({"model": "gpt-3.5-turbo", "max_tokens": 500}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "chatcmpl-1",
                "model": "gpt-3.5-turbo",
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "1. Walk"}, "finish_reason": "stop"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let resp = test_client(&server.uri()).complete(&test_request()).await.unwrap();
        assert_eq!(resp.first_text(), "1. Walk");
        assert_eq!(resp.id.as_deref(), Some("chatcmpl-1"));
    }

    #[tokio::test]
    async fn error_status_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "error": {"message": "Rate limit reached", "type": "requests"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .complete(&test_request())
            .await
            .unwrap_err()
            .to_string();
        assert!(err.contains("Rate limit reached"), "got: {err}");
        assert!(err.starts_with("openai error"), "got: {err}");
    }

    #[tokio::test]
    async fn unparseable_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = test_client(&server.uri()).complete(&test_request()).await.unwrap_err();
        assert!(err.to_string().contains("failed to parse"), "got: {err}");
    }

    #[tokio::test]
    async fn plain_text_error_body_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let err = test_client(&server.uri()).complete(&test_request()).await.unwrap_err();
        assert!(err.to_string().contains("502"), "got: {err}");
    }
}
