// SPDX-FileCopyrightText: 2026 EcoPulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query modules for the travel and device tables.

pub mod devices;
pub mod travel;

use std::str::FromStr;

use rusqlite::types::Type;

/// Parse a TEXT column into an enum, surfacing bad values as conversion failures.
pub(crate) fn parse_text<T>(idx: usize, value: String) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    T::from_str(&value)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
