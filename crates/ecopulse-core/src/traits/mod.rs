// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.
//!
//! All adapters extend the [`PluginAdapter`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod adapter;
pub mod distance;
pub mod generation;
pub mod storage;

pub use adapter::PluginAdapter;
pub use distance::DistanceAdapter;
pub use generation::TextGenerationAdapter;
pub use storage::StorageAdapter;
