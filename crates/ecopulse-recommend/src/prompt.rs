// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt template for the recommendation request.

use ecopulse_insights::EmissionInsights;

pub const SYSTEM_ROLE: &str =
    "You are an environmental consultant specializing in carbon footprint reduction.";

/// Render the user prompt. Optional lines are omitted when the figure is absent.
pub fn build_prompt(insights: &EmissionInsights) -> String {
    let transport = insights
        .top_travel_mode
        .map(|mode| format!("Most used transport: {mode}\n"))
        .unwrap_or_default();
    let device = insights
        .top_device
        .as_ref()
        .map(|name| format!("Most impactful device: {name}\n"))
        .unwrap_or_default();

    format!(
        "You are an environmental consultant. Based on the following carbon footprint data, \
         provide 5 specific, actionable recommendations to reduce emissions:\n\n\
         Total emissions: {total:.2} kg CO2\n\
         Travel emissions: {travel:.2} kg CO2\n\
         Electronics emissions: {electronics:.2} kg CO2\n\
         {transport}{device}\n\
         Provide recommendations as a numbered list (1-5) with each being concise and specific.",
        total = insights.total_emissions,
        travel = insights.travel_emissions,
        electronics = insights.electronics_emissions,
    )
}
