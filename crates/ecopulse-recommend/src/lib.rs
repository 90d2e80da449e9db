// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Emission-reduction recommendations for EcoPulse.
//!
//! Turns [`EmissionInsights`](ecopulse_insights::EmissionInsights) into a
//! prompt, asks the configured text-generation adapter for a numbered list,
//! and falls back to a fixed list whenever that does not work out.

pub mod fallback;
pub mod generator;
pub mod parse;
pub mod prompt;

pub use fallback::FALLBACK_RECOMMENDATIONS;
pub use generator::{RecommendationBundle, RecommendationGenerator};
pub use parse::parse_recommendations;
pub use prompt::{SYSTEM_ROLE, build_prompt};
