// Dweve FWBench - Framework Benchmark Aggregation
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Duration string normalization.
//!
//! Load runners print latencies as human-readable durations (`"1.5s"`,
//! `"820.4µs"`, `"12ms"`). Everything downstream works in milliseconds.
//!
//! # Supported forms
//!
//! | Input | Milliseconds |
//! |-------|--------------|
//! | `"100ms"` | `100.0` |
//! | `"1.5s"` | `1500.0` |
//! | `"2500µs"`, `"2500μs"`, `"2500us"` | `2.5` |
//! | `"42"` (no suffix) | `42.0` |
//!
//! Suffixes are matched case-insensitively. Any other unit is unsupported.
//!
//! # Leniency
//!
//! [`parse_duration_ms`] returns `0.0` for empty, missing and unparsable
//! input, so a `0.0` can mean either a real zero or a failure. Failures on
//! non-empty input are logged at `warn` level. Use
//! [`try_parse_duration_ms`] when the distinction matters.

use crate::error::DurationError;
use tracing::warn;

/// Microsecond suffixes: micro sign (U+00B5), Greek mu (U+03BC), ASCII.
const MICRO_SUFFIXES: [&str; 3] = ["\u{b5}s", "\u{3bc}s", "us"];

/// Parses a duration string into milliseconds, reporting failures.
///
/// # Errors
///
/// - [`DurationError::Empty`] for empty or whitespace-only input.
/// - [`DurationError::InvalidNumber`] when the numeric part does not parse,
///   is not finite, or the unit is not supported.
///
/// # Examples
///
/// ```
/// use fwbench_core::{try_parse_duration_ms, DurationError};
///
/// assert_eq!(try_parse_duration_ms("1.5s"), Ok(1500.0));
/// assert_eq!(try_parse_duration_ms("2500µs"), Ok(2.5));
/// assert_eq!(try_parse_duration_ms(""), Err(DurationError::Empty));
/// assert!(try_parse_duration_ms("1m30s").is_err());
/// ```
pub fn try_parse_duration_ms(input: &str) -> Result<f64, DurationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DurationError::Empty);
    }

    let lower = trimmed.to_lowercase();
    let (number, scale) = split_unit(&lower);

    let invalid = || DurationError::InvalidNumber {
        input: trimmed.to_string(),
    };

    let value: f64 = number.trim().parse().map_err(|_| invalid())?;
    let ms = value * scale;
    if !ms.is_finite() {
        return Err(invalid());
    }

    Ok(ms)
}

/// Parses a duration string into milliseconds, falling back to `0.0`.
///
/// `None` and empty strings map to `0.0` silently. Unparsable input also
/// maps to `0.0` but leaves a warning in the log.
///
/// # Examples
///
/// ```
/// use fwbench_core::parse_duration_ms;
///
/// assert_eq!(parse_duration_ms(Some("100ms")), 100.0);
/// assert_eq!(parse_duration_ms(Some("0s")), 0.0);
/// assert_eq!(parse_duration_ms(None), 0.0);
/// assert_eq!(parse_duration_ms(Some("garbage")), 0.0);
/// ```
pub fn parse_duration_ms(input: Option<&str>) -> f64 {
    let Some(raw) = input else {
        return 0.0;
    };

    match try_parse_duration_ms(raw) {
        Ok(ms) => ms,
        Err(DurationError::Empty) => 0.0,
        Err(err) => {
            warn!(%err, "duration treated as 0 ms");
            0.0
        }
    }
}

/// Splits a lowercased duration into its numeric part and a millisecond scale.
///
/// Micro and milli suffixes must be checked before the bare `s`.
fn split_unit(lower: &str) -> (&str, f64) {
    for suffix in MICRO_SUFFIXES {
        if let Some(number) = lower.strip_suffix(suffix) {
            return (number, 0.001);
        }
    }
    if let Some(number) = lower.strip_suffix("ms") {
        return (number, 1.0);
    }
    if let Some(number) = lower.strip_suffix('s') {
        return (number, 1000.0);
    }
    (lower, 1.0)
}
