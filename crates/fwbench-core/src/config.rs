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

//! Aggregation configuration.
//!
//! Input discovery, header names and artifact file names are all fixed by
//! convention; this module collects them in one place so tests and callers
//! can override them.

/// Results directory used when no root is given on the command line.
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Name of the raw per-run summary files produced by the load runner.
pub const DEFAULT_SUMMARY_FILE: &str = "summary.csv";

/// Default file name of the ranking table.
pub const DEFAULT_RANKING_FILE: &str = "performance_ranking.csv";

/// Default file name of the scenario comparison table.
pub const DEFAULT_COMPARISON_FILE: &str = "scenario_comparison.csv";

/// Default file name of the per-framework analysis document.
pub const DEFAULT_ANALYSIS_FILE: &str = "framework_analysis.json";

/// Default file name of the combined report document.
pub const DEFAULT_REPORT_FILE: &str = "comprehensive_report.json";

/// Header names looked up in summary files. Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    /// Framework identifier column (required).
    pub framework: String,
    /// Scenario identifier column (required).
    pub scenario: String,
    /// Throughput column (required to produce records).
    pub requests_per_sec: String,
    /// Mean latency column (optional).
    pub latency_mean: String,
    /// 99th percentile latency column (optional).
    pub latency_p99: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            framework: "Framework".to_string(),
            scenario: "Scenario".to_string(),
            requests_per_sec: "RequestsPerSec".to_string(),
            latency_mean: "LatencyMean".to_string(),
            latency_p99: "LatencyP99".to_string(),
        }
    }
}

/// Configuration for one aggregation run.
///
/// # Example
///
/// ```
/// use fwbench_core::AggregateConfig;
///
/// let config = AggregateConfig::default()
///     .with_summary_file_name("run_summary.csv")
///     .with_delimiter(b';');
/// assert_eq!(config.summary_file_name, "run_summary.csv");
/// assert_eq!(config.ranking_file_name, "performance_ranking.csv");
/// ```
#[derive(Debug, Clone)]
pub struct AggregateConfig {
    /// Exact file name of accepted input files.
    pub summary_file_name: String,
    /// Output name of the ranking CSV.
    pub ranking_file_name: String,
    /// Output name of the scenario comparison CSV.
    pub comparison_file_name: String,
    /// Output name of the framework analysis JSON.
    pub analysis_file_name: String,
    /// Output name of the combined report JSON.
    pub report_file_name: String,
    /// Header names used by the loader.
    pub columns: ColumnNames,
    /// Field delimiter for reading and writing CSV (default: `,`).
    pub delimiter: u8,
    /// Whether to trim whitespace around CSV fields (default: `true`).
    pub trim: bool,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            summary_file_name: DEFAULT_SUMMARY_FILE.to_string(),
            ranking_file_name: DEFAULT_RANKING_FILE.to_string(),
            comparison_file_name: DEFAULT_COMPARISON_FILE.to_string(),
            analysis_file_name: DEFAULT_ANALYSIS_FILE.to_string(),
            report_file_name: DEFAULT_REPORT_FILE.to_string(),
            columns: ColumnNames::default(),
            delimiter: b',',
            trim: true,
        }
    }
}

impl AggregateConfig {
    /// Sets the accepted input file name.
    pub fn with_summary_file_name(mut self, name: impl Into<String>) -> Self {
        self.summary_file_name = name.into();
        self
    }

    /// Sets the header names.
    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the CSV delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enables or disables field trimming.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Returns true if `name` is one of the artifact names this run writes.
    pub fn is_artifact_name(&self, name: &str) -> bool {
        [
            &self.ranking_file_name,
            &self.comparison_file_name,
            &self.analysis_file_name,
            &self.report_file_name,
        ]
        .iter()
        .any(|artifact| artifact.as_str() == name)
    }
}
