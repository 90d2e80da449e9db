// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock text generator for deterministic testing.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use ecopulse_core::{
    AdapterType, EcoPulseError, GenerationRequest, HealthStatus, PluginAdapter,
    TextGenerationAdapter,
};

/// A text generator that returns queued replies.
///
/// `Err` entries simulate upstream failures. When the queue is empty the
/// generator fails, so tests notice unexpected calls.
pub struct MockGenerator {
    replies: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_replies(replies: Vec<String>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(Ok).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub async fn push_reply(&self, text: impl Into<String>) {
        self.replies.lock().await.push_back(Ok(text.into()));
    }

    pub async fn push_failure(&self, message: impl Into<String>) {
        self.replies.lock().await.push_back(Err(message.into()));
    }

    /// Requests received so far.
    pub async fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().await.clone()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MockGenerator {
    fn name(&self) -> &str {
        "mock-generator"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::TextGeneration
    }

    async fn health_check(&self) -> Result<HealthStatus, EcoPulseError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), EcoPulseError> {
        Ok(())
    }
}

#[async_trait]
impl TextGenerationAdapter for MockGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, EcoPulseError> {
        self.requests.lock().await.push(request);
        let next = self
            .replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err("no scripted reply".to_string()));
        next.map_err(|message| EcoPulseError::ExternalService {
            service: "openai",
            message,
            source: None,
        })
    }
}
