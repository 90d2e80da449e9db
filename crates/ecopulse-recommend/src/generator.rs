// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recommendation generation with a fixed fallback.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use ecopulse_core::{EcoPulseError, GenerationRequest, StorageAdapter, TextGenerationAdapter};
use ecopulse_insights::{EmissionInsights, recommendation_insights};

use crate::fallback::fallback;
use crate::parse::parse_recommendations;
use crate::prompt::{SYSTEM_ROLE, build_prompt};

/// Recommendations plus the rounded figures they were generated from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationBundle {
    pub recommendations: Vec<String>,
    pub insights: EmissionInsights,
}

/// Asks the text-generation adapter for advice, never failing the caller.
#[derive(Clone)]
pub struct RecommendationGenerator {
    generator: Option<Arc<dyn TextGenerationAdapter>>,
}

impl RecommendationGenerator {
    pub fn new(generator: Option<Arc<dyn TextGenerationAdapter>>) -> Self {
        Self { generator }
    }

    /// A generator that always serves the fallback list.
    pub fn fallback_only() -> Self {
        Self { generator: None }
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    /// One attempt at generated recommendations; the fixed list otherwise.
    pub async fn recommend(&self, insights: &EmissionInsights) -> Vec<String> {
        let Some(generator) = &self.generator else {
            debug!("no text generator configured, serving fallback recommendations");
            return fallback();
        };

        let request = GenerationRequest {
            system: SYSTEM_ROLE.to_string(),
            prompt: build_prompt(insights),
        };
        match generator.generate(request).await {
            Ok(reply) => {
                let parsed = parse_recommendations(&reply);
                if parsed.is_empty() {
                    warn!(
                        adapter = generator.name(),
                        "generated reply had no numbered recommendations, using fallback"
                    );
                    fallback()
                } else {
                    debug!(count = parsed.len(), "parsed generated recommendations");
                    parsed
                }
            }
            Err(e) => {
                warn!(
                    adapter = generator.name(),
                    error = %e,
                    "recommendation generation failed, using fallback"
                );
                fallback()
            }
        }
    }

    /// Compute insights from the store and attach recommendations.
    ///
    /// Only storage failures surface as errors.
    pub async fn bundle(
        &self,
        storage: &dyn StorageAdapter,
    ) -> Result<RecommendationBundle, EcoPulseError> {
        let insights = recommendation_insights(storage).await?;
        let recommendations = self.recommend(&insights).await;
        Ok(RecommendationBundle {
            recommendations,
            insights: insights.rounded(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use ecopulse_core::{AdapterType, HealthStatus, PluginAdapter, TransportMode};
    use tracing_test::traced_test;

    use crate::FALLBACK_RECOMMENDATIONS;

    struct Scripted {
        reply: Result<String, String>,
        seen: Mutex<Vec<GenerationRequest>>,
    }

    impl Scripted {
        fn new(reply: Result<&str, &str>) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.map(str::to_string).map_err(str::to_string),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl PluginAdapter for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }
        fn version(&self) -> semver::Version {
            semver::Version::new(0, 0, 0)
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
    impl TextGenerationAdapter for Scripted {
        async fn generate(&self, request: GenerationRequest) -> Result<String, EcoPulseError> {
            self.seen.lock().unwrap().push(request);
            self.reply.clone().map_err(|message| EcoPulseError::ExternalService {
                service: "openai",
                message,
                source: None,
            })
        }
    }

    fn insights() -> EmissionInsights {
        EmissionInsights {
            total_emissions: 10.0,
            travel_emissions: 10.0,
            electronics_emissions: 0.0,
            top_travel_mode: Some(TransportMode::Car),
            top_device: None,
        }
    }

    fn expected_fallback() -> Vec<String> {
        FALLBACK_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn parsed_reply_is_returned() {
        let adapter = Scripted::new(Ok("1. Take the train\n2. Unplug devices\nNote: misc"));
        let generator = RecommendationGenerator::new(Some(adapter.clone()));
        let recs = generator.recommend(&insights()).await;
        assert_eq!(recs, vec!["Take the train", "Unplug devices"]);

        let seen = adapter.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].system, SYSTEM_ROLE);
        assert!(seen[0].prompt.contains("Most used transport: car"));
    }

    #[tokio::test]
    #[traced_test]
    async fn failure_falls_back_once_without_retry() {
        let adapter = Scripted::new(Err("quota exceeded"));
        let generator = RecommendationGenerator::new(Some(adapter.clone()));
        assert_eq!(generator.recommend(&insights()).await, expected_fallback());
        assert_eq!(adapter.seen.lock().unwrap().len(), 1);
        assert!(logs_contain("recommendation generation failed"));
    }

    #[tokio::test]
    async fn unnumbered_reply_falls_back() {
        let adapter = Scripted::new(Ok("Drive less and recycle."));
        let generator = RecommendationGenerator::new(Some(adapter));
        assert_eq!(generator.recommend(&insights()).await, expected_fallback());
    }

    #[tokio::test]
    async fn unconfigured_generator_serves_fallback() {
        let generator = RecommendationGenerator::fallback_only();
        assert!(!generator.is_configured());
        assert_eq!(generator.recommend(&insights()).await, expected_fallback());
    }

    #[test]
    fn bundle_serializes_recommendations_and_camel_case_insights() {
        let bundle = RecommendationBundle {
            recommendations: vec!["Take the train".to_string()],
            insights: insights(),
        };
        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json["recommendations"], serde_json::json!(["Take the train"]));
        assert_eq!(json["insights"]["totalEmissions"], 10.0);
        assert_eq!(json["insights"]["topTravelMode"], "car");
        assert!(json["insights"].get("topDevice").is_none());
    }
}
