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

//! End-to-end aggregation: load, analyze, assemble and persist.

use crate::analysis::create_framework_analysis;
use crate::comparison::create_scenario_comparison;
use crate::config::AggregateConfig;
use crate::error::Result;
use crate::loader::load_results;
use crate::ranking::create_performance_ranking;
use crate::report::Report;
use crate::reporters::{save_results, SavedArtifacts};
use std::path::Path;
use tracing::info;

/// Result of one aggregation run.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// No summary records were found; nothing was written.
    NoData,
    /// The report was built and its artifacts saved.
    Completed {
        /// The assembled report.
        report: Report,
        /// Where the artifacts were written.
        artifacts: SavedArtifacts,
        /// Number of loaded records.
        records: usize,
    },
}

/// Aggregates every summary file beneath `root` and writes the artifacts
/// back into `root`.
///
/// Unreadable or malformed input files are skipped. Only a failure to write
/// an artifact is returned as an error.
///
/// # Examples
///
/// ```no_run
/// use fwbench_core::{pipeline, AggregateConfig, PipelineOutcome};
/// use std::path::Path;
///
/// match pipeline::run(Path::new("results"), &AggregateConfig::default())? {
///     PipelineOutcome::NoData => println!("No benchmark data found"),
///     PipelineOutcome::Completed { report, .. } => {
///         println!("{} frameworks", report.summary.total_frameworks)
///     }
/// }
/// # Ok::<(), fwbench_core::FwbenchError>(())
/// ```
pub fn run(root: &Path, config: &AggregateConfig) -> Result<PipelineOutcome> {
    let dataset = load_results(root, config);
    if dataset.is_empty() {
        return Ok(PipelineOutcome::NoData);
    }

    info!(
        records = dataset.len(),
        frameworks = dataset.frameworks().len(),
        scenarios = dataset.scenarios().len(),
        "aggregating benchmark results"
    );

    let report = Report::generate(
        create_performance_ranking(&dataset),
        create_scenario_comparison(&dataset),
        create_framework_analysis(&dataset),
    );
    let artifacts = save_results(&report, root, config)?;

    Ok(PipelineOutcome::Completed {
        report,
        artifacts,
        records: dataset.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_root_is_no_data() {
        let dir = TempDir::new().unwrap();
        let outcome = run(dir.path(), &AggregateConfig::default()).unwrap();
        assert_eq!(outcome, PipelineOutcome::NoData);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_completed_run() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("summary.csv"),
            "Framework,Scenario,RequestsPerSec\ngin,json,100\necho,json,50\n",
        )
        .unwrap();

        match run(dir.path(), &AggregateConfig::default()).unwrap() {
            PipelineOutcome::Completed {
                report,
                artifacts,
                records,
            } => {
                assert_eq!(records, 2);
                assert_eq!(report.summary.top_performer.as_deref(), Some("gin"));
                assert!(artifacts.report.is_file());
            }
            PipelineOutcome::NoData => panic!("expected a report"),
        }
    }
}
