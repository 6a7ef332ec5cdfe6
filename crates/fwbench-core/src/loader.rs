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

//! Discovery and loading of raw summary files.
//!
//! Only files whose name is exactly the configured summary name (by default
//! `summary.csv`) are read. This keeps the pipeline's own exports, such as
//! `performance_ranking.csv`, out of its input even when they live in the
//! same tree. A configured summary name that collides with one of the
//! export names is rejected, so a run never reads its own output.
//!
//! Loading is lenient at two levels:
//!
//! - **Files**: a file that cannot be read, is malformed, or lacks a required
//!   column is logged and skipped. The run continues.
//! - **Rows**: rows with an empty framework, an empty scenario or an unusable
//!   `RequestsPerSec` value are logged and dropped. The rest of the file is kept.

use crate::config::AggregateConfig;
use crate::dataset::{Dataset, Record};
use crate::error::{FwbenchError, Result};
use csv::StringRecord;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Loads every summary file beneath `root` into one dataset.
///
/// A missing root or a tree without summary files yields an empty dataset,
/// which callers treat as "nothing to report".
///
/// # Examples
///
/// ```no_run
/// use fwbench_core::{load_results, AggregateConfig};
/// use std::path::Path;
///
/// let data = load_results(Path::new("results"), &AggregateConfig::default());
/// println!("{} records", data.len());
/// ```
pub fn load_results(root: &Path, config: &AggregateConfig) -> Dataset {
    let mut dataset = Dataset::new();

    if !root.exists() {
        warn!(root = %root.display(), "results directory not found");
        return dataset;
    }

    let files = discover_summary_files(root, config);
    if files.is_empty() {
        info!(
            root = %root.display(),
            file_name = %config.summary_file_name,
            "no summary files found"
        );
        return dataset;
    }

    for path in files {
        match load_summary_file(&path, config) {
            Ok(records) => {
                info!(path = %path.display(), records = records.len(), "loaded summary file");
                dataset.extend(records);
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping summary file");
            }
        }
    }

    dataset
}

/// Lists summary files beneath `root`, sorted by path for stable output.
///
/// Returns nothing when the summary name is also an export name.
pub fn discover_summary_files(root: &Path, config: &AggregateConfig) -> Vec<PathBuf> {
    if config.is_artifact_name(&config.summary_file_name) {
        warn!(
            file_name = %config.summary_file_name,
            "summary file name collides with an export name; refusing to read it"
        );
        return Vec::new();
    }

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = %err, "cannot read directory entry");
                None
            }
        })
        .filter(|entry| {
            entry.file_type().is_file()
                && entry.file_name().to_str() == Some(config.summary_file_name.as_str())
        })
        .map(|entry| entry.into_path())
        .collect()
}

/// Parses one summary file into records tagged with its path.
///
/// # Errors
///
/// - [`FwbenchError::Io`] if the file cannot be opened.
/// - [`FwbenchError::Csv`] for malformed CSV (for example ragged rows).
/// - [`FwbenchError::MissingColumn`] if `Framework`, `Scenario` or
///   `RequestsPerSec` is absent from the header.
pub fn load_summary_file(path: &Path, config: &AggregateConfig) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|e| FwbenchError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| FwbenchError::csv(path, e))?
        .clone();
    let columns = ColumnIndices::resolve(&headers, path, config)?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|e| FwbenchError::csv(path, e))?;
        let line = row
            .position()
            .map(|pos| pos.line())
            .unwrap_or(index as u64 + 2);

        if let Some(record) = columns.build_record(&row, path, line) {
            records.push(record);
        }
    }

    debug!(path = %path.display(), records = records.len(), "parsed summary file");
    Ok(records)
}

/// Header positions of the columns the loader reads.
#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    framework: usize,
    scenario: usize,
    requests_per_sec: usize,
    latency_mean: Option<usize>,
    latency_p99: Option<usize>,
}

impl ColumnIndices {
    fn resolve(headers: &StringRecord, path: &Path, config: &AggregateConfig) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| FwbenchError::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            })
        };

        let names = &config.columns;
        Ok(Self {
            framework: require(names.framework.as_str())?,
            scenario: require(names.scenario.as_str())?,
            requests_per_sec: require(names.requests_per_sec.as_str())?,
            latency_mean: find(names.latency_mean.as_str()),
            latency_p99: find(names.latency_p99.as_str()),
        })
    }

    fn build_record(&self, row: &StringRecord, path: &Path, line: u64) -> Option<Record> {
        let framework = row.get(self.framework).unwrap_or_default();
        if framework.trim().is_empty() {
            warn!(path = %path.display(), line, "dropping row with empty framework");
            return None;
        }

        let scenario = row.get(self.scenario).unwrap_or_default();
        if scenario.trim().is_empty() {
            warn!(path = %path.display(), line, "dropping row with empty scenario");
            return None;
        }

        let raw_rps = row.get(self.requests_per_sec).unwrap_or_default();
        let requests_per_sec = match raw_rps.trim().parse::<f64>() {
            Ok(rps) if rps.is_finite() && rps >= 0.0 => rps,
            _ => {
                warn!(
                    path = %path.display(),
                    line,
                    value = raw_rps,
                    "dropping row with unusable requests per second"
                );
                return None;
            }
        };

        let optional = |index: Option<usize>| {
            index
                .and_then(|i| row.get(i))
                .map(|value| value.to_string())
        };

        Some(Record {
            framework: framework.to_string(),
            scenario: scenario.to_string(),
            requests_per_sec,
            latency_mean: optional(self.latency_mean),
            latency_p99: optional(self.latency_p99),
            source_file: path.to_path_buf(),
        })
    }
}
