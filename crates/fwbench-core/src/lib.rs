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

//! Aggregation, ranking and reporting for web-framework load-test results.
//!
//! A load-test run leaves one `summary.csv` per framework (or per run)
//! somewhere beneath a results directory. This crate merges them into a
//! single [`Dataset`] and derives:
//!
//! - a **performance ranking** of frameworks by mean requests per second,
//! - a **scenario comparison** table with the winner and gap per scenario,
//! - a **framework analysis** with latency and consistency profiles,
//! - a combined **report** stamped with the generation time.
//!
//! The results are written back into the results directory as two CSV and
//! two JSON files.
//!
//! # Examples
//!
//! ```
//! use fwbench_core::{
//!     create_performance_ranking, create_scenario_comparison, Dataset, Record,
//! };
//!
//! let data: Dataset = vec![
//!     Record::new("gin", "json", 52000.0, "results/gin/summary.csv"),
//!     Record::new("echo", "json", 48000.0, "results/echo/summary.csv"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let ranking = create_performance_ranking(&data);
//! assert_eq!(ranking.top().unwrap().framework, "gin");
//!
//! let comparison = create_scenario_comparison(&data);
//! assert_eq!(comparison.get("json").unwrap().best_framework, "gin");
//! ```
//!
//! # Loading
//!
//! Input files that are unreadable or miss a required column are skipped
//! with a warning, and so are rows with an unusable throughput value. A
//! missing results directory is an empty dataset, not an error.

#![warn(missing_docs)]

pub mod analysis;
pub mod comparison;
pub mod config;
pub mod dataset;
pub mod duration;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod ranking;
pub mod report;
pub mod reporters;
pub mod stats;

pub use analysis::{create_framework_analysis, FrameworkAnalysis, FrameworkProfile};
pub use comparison::{
    create_scenario_comparison, ComparisonTable, ScenarioComparison, ScenarioRow, MIN_FRAMEWORKS,
};
pub use config::{
    AggregateConfig, ColumnNames, DEFAULT_ANALYSIS_FILE, DEFAULT_COMPARISON_FILE,
    DEFAULT_RANKING_FILE, DEFAULT_REPORT_FILE, DEFAULT_RESULTS_DIR, DEFAULT_SUMMARY_FILE,
};
pub use dataset::{Dataset, Record};
pub use duration::{parse_duration_ms, try_parse_duration_ms};
pub use error::{DurationError, FwbenchError, Result};
pub use loader::{discover_summary_files, load_results, load_summary_file};
pub use pipeline::{run, PipelineOutcome};
pub use ranking::{create_performance_ranking, Ranking, RankingEntry};
pub use report::{Report, ReportSummary, TIMESTAMP_FORMAT};
pub use reporters::{save_results, SavedArtifacts};
