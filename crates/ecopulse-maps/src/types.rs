// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Distance Matrix response shapes. Only the fields EcoPulse reads.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DistanceMatrixResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    pub status: String,
    #[serde(default)]
    pub distance: Option<Distance>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Distance {
    /// Metres.
    pub value: f64,
    #[serde(default)]
    pub text: Option<String>,
}

impl DistanceMatrixResponse {
    pub fn first_element(&self) -> Option<&Element> {
        self.rows.first()?.elements.first()
    }
}
