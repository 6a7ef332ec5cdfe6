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

//! Error types for loading, aggregating and exporting benchmark results.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the aggregation pipeline.
///
/// Most of these never reach the caller of [`crate::pipeline::run`]: the
/// loader catches per-file failures, logs them and drops the file. Only
/// failures while writing artifacts propagate.
///
/// # Examples
///
/// ```
/// use fwbench_core::FwbenchError;
/// use std::path::PathBuf;
///
/// let err = FwbenchError::MissingColumn {
///     path: PathBuf::from("results/summary.csv"),
///     column: "Scenario".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Missing required column 'Scenario' in 'results/summary.csv'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum FwbenchError {
    /// Reading or writing a file failed.
    #[error("I/O error for '{path}': {source}")]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader or writer rejected the data.
    #[error("CSV error in '{path}': {source}")]
    Csv {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: csv::Error,
    },

    /// A summary file lacks a column needed to build records.
    #[error("Missing required column '{column}' in '{path}'")]
    MissingColumn {
        /// File that was rejected.
        path: PathBuf,
        /// Header name that was not found.
        column: String,
    },

    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for `Result` with [`FwbenchError`].
pub type Result<T> = std::result::Result<T, FwbenchError>;

impl FwbenchError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FwbenchError::Io {
            path: path.into(),
            source,
        }
    }

    /// Wraps a CSV error with the path it occurred on.
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        FwbenchError::Csv {
            path: path.into(),
            source,
        }
    }
}

/// Failure modes of the strict duration parser.
///
/// The lenient parser maps both variants to `0.0`; this type exists so the
/// two cases can still be told apart in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// Input was empty or whitespace.
    #[error("empty duration")]
    Empty,

    /// Input had no usable numeric value for a supported unit.
    #[error("unparsable duration '{input}'")]
    InvalidNumber {
        /// The original input.
        input: String,
    },
}
