// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Numbered-list extraction from free-form model replies.

use std::sync::LazyLock;

use regex::Regex;

/// Upper bound on recommendations kept from one reply.
pub const MAX_RECOMMENDATIONS: usize = 5;

static NUMBERED_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// Keep lines that start with `<n>.`, strip the marker and trim.
///
/// Returns an empty list when the reply has no numbered lines.
pub fn parse_recommendations(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(str::trim)
        .filter_map(|line| {
            let marker = NUMBERED_PREFIX.find(line)?;
            let text = line[marker.end()..].trim();
            (!text.is_empty()).then(|| text.to_string())
        })
        .take(MAX_RECOMMENDATIONS)
        .collect()
}
