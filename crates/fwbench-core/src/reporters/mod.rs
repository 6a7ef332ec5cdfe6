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

//! Output artifacts for an aggregated report.
//!
//! # Modules
//!
//! - `csv`: ranking and scenario comparison tables
//! - `json`: framework analysis and combined report
//! - `console`: human-readable summary

pub mod console;
pub mod csv;
pub mod json;

pub use self::console::{print_summary, render_summary};
pub use self::csv::{comparison_to_csv, ranking_to_csv, write_comparison_csv, write_ranking_csv};
pub use self::json::export_json;

use crate::config::AggregateConfig;
use crate::error::{FwbenchError, Result};
use crate::report::Report;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Paths of the artifacts written by [`save_results`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArtifacts {
    /// Ranking CSV.
    pub ranking: PathBuf,
    /// Scenario comparison CSV.
    pub comparison: PathBuf,
    /// Framework analysis JSON.
    pub analysis: PathBuf,
    /// Combined report JSON.
    pub report: PathBuf,
}

impl SavedArtifacts {
    /// All paths in write order.
    pub fn paths(&self) -> [&Path; 4] {
        [
            self.ranking.as_path(),
            self.comparison.as_path(),
            self.analysis.as_path(),
            self.report.as_path(),
        ]
    }
}

/// Writes the four artifacts of `report` into `root`.
///
/// The directory is created if needed and existing artifacts are
/// overwritten. The first failing write aborts the run.
pub fn save_results(
    report: &Report,
    root: &Path,
    config: &AggregateConfig,
) -> Result<SavedArtifacts> {
    fs::create_dir_all(root).map_err(|e| FwbenchError::io(root, e))?;

    let artifacts = SavedArtifacts {
        ranking: root.join(&config.ranking_file_name),
        comparison: root.join(&config.comparison_file_name),
        analysis: root.join(&config.analysis_file_name),
        report: root.join(&config.report_file_name),
    };

    write_ranking_csv(&report.ranking, &artifacts.ranking, config.delimiter)?;
    info!(path = %artifacts.ranking.display(), "saved performance ranking");

    write_comparison_csv(
        &report.scenario_comparison,
        &artifacts.comparison,
        config.delimiter,
    )?;
    info!(path = %artifacts.comparison.display(), "saved scenario comparison");

    export_json(&report.framework_analysis, &artifacts.analysis)?;
    info!(path = %artifacts.analysis.display(), "saved framework analysis");

    export_json(report, &artifacts.report)?;
    info!(path = %artifacts.report.display(), "saved comprehensive report");

    Ok(artifacts)
}
