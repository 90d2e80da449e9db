// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI text-generation adapter for EcoPulse.
//!
//! Implements [`TextGenerationAdapter`] on top of the Chat Completions API.
//! API key resolution order: config -> `OPENAI_API_KEY` env var -> error.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use ecopulse_config::model::OpenAiConfig;
use ecopulse_core::{
    AdapterType, EcoPulseError, GenerationRequest, HealthStatus, PluginAdapter,
    TextGenerationAdapter,
};
use tracing::{debug, info};

use crate::client::OpenAiClient;
use crate::types::{ChatMessage, ChatRequest};

/// Environment variable consulted when the config carries no key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Chat Completions generator with fixed model parameters.
pub struct OpenAiGenerator {
    client: OpenAiClient,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiGenerator {
    pub fn new(config: &OpenAiConfig) -> Result<Self, EcoPulseError> {
        let api_key = resolve_api_key(&config.api_key)?;
        let client = OpenAiClient::new(
            &api_key,
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
        )?;
        info!(model = %config.model, "OpenAI generator initialized");
        Ok(Self {
            client,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    fn to_chat_request(&self, request: GenerationRequest) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(request.system),
                ChatMessage::user(request.prompt),
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

#[async_trait]
impl PluginAdapter for OpenAiGenerator {
    fn name(&self) -> &str {
        "openai"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::TextGeneration
    }

    async fn health_check(&self) -> Result<HealthStatus, EcoPulseError> {
        // No probe request: it would spend tokens.
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), EcoPulseError> {
        debug!("OpenAI generator shutting down");
        Ok(())
    }
}

#[async_trait]
impl TextGenerationAdapter for OpenAiGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, EcoPulseError> {
        let chat = self.to_chat_request(request);
        let response = self.client.complete(&chat).await?;
        Ok(response.first_text().to_string())
    }
}

/// Resolve the API key: non-empty config value first, then the environment.
pub fn resolve_api_key(config_key: &Option<String>) -> Result<String, EcoPulseError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.clone());
    }

    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            EcoPulseError::Config(format!(
                "OpenAI API key not found. Set openai.api_key in config or {API_KEY_ENV} environment variable."
            ))
        })
}
