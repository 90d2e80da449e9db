// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text-generation adapter trait for LLM integrations (OpenAI, etc.).

use async_trait::async_trait;

use crate::error::EcoPulseError;
use crate::traits::adapter::PluginAdapter;
use crate::types::GenerationRequest;

/// Adapter for single-shot text generation.
#[async_trait]
pub trait TextGenerationAdapter: PluginAdapter {
    /// Sends the request and returns the generated text.
    async fn generate(&self, request: GenerationRequest) -> Result<String, EcoPulseError>;
}
