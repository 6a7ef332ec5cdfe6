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

//! End-to-end tests for the aggregation pipeline.
//!
//! Covers loading from a results tree, the derived tables and the written
//! artifacts, including loader robustness and repeat runs.

use fwbench_core::{
    create_framework_analysis, create_performance_ranking, create_scenario_comparison,
    load_results, pipeline, AggregateConfig, PipelineOutcome, Report,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HEADER: &str = "Framework,Scenario,Requests,Connections,RequestsPerSec,LatencyMean,LatencyP50,LatencyP99,Timestamp";

fn write_summary(root: &Path, dir: &str, rows: &[&str]) {
    let dir = root.join(dir);
    fs::create_dir_all(&dir).unwrap();
    let mut content = format!("{}\n", HEADER);
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(dir.join("summary.csv"), content).unwrap();
}

fn populated_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_summary(
        dir.path(),
        "gin",
        &[
            "gin,json,100000,64,52000.5,1.2ms,1.0ms,4.5ms,2025-01-01T00:00:00",
            "gin,plaintext,100000,64,61000,900µs,800µs,3ms,2025-01-01T00:01:00",
        ],
    );
    write_summary(
        dir.path(),
        "echo",
        &[
            "echo,json,100000,64,48000,1.4ms,1.1ms,5ms,2025-01-01T00:02:00",
            "echo,plaintext,100000,64,59000,1ms,0.9ms,3.2ms,2025-01-01T00:03:00",
        ],
    );
    write_summary(
        dir.path(),
        "fiber",
        &["fiber,json,100000,64,50000,1.3ms,1.0ms,4.0ms,2025-01-01T00:04:00"],
    );
    dir
}

fn completed(root: &Path) -> (Report, fwbench_core::SavedArtifacts) {
    match pipeline::run(root, &AggregateConfig::default()).unwrap() {
        PipelineOutcome::Completed {
            report, artifacts, ..
        } => (report, artifacts),
        PipelineOutcome::NoData => panic!("expected data"),
    }
}

// =============================================================================
// Derived tables
// =============================================================================

#[test]
fn test_ranks_are_contiguous_and_ordered() {
    let root = populated_root();
    let data = load_results(root.path(), &AggregateConfig::default());
    let ranking = create_performance_ranking(&data);

    let ranks: Vec<_> = ranking.entries().iter().map(|e| e.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
    for pair in ranking.entries().windows(2) {
        assert!(pair[0].avg_rps >= pair[1].avg_rps);
    }
    assert_eq!(ranking.top().unwrap().framework, "gin");
}

#[test]
fn test_comparison_rows_are_consistent() {
    let root = populated_root();
    let data = load_results(root.path(), &AggregateConfig::default());
    let comparison = create_scenario_comparison(&data);

    assert_eq!(comparison.frameworks().len(), 3);
    for row in comparison.rows() {
        assert!(row.best_rps >= row.worst_rps);
        assert!(row.rps_range >= 0.0);
        assert_eq!(row.value(&row.best_framework), Some(row.best_rps));
    }

    let plaintext = comparison.get("plaintext").unwrap();
    assert_eq!(plaintext.value("fiber"), None);
    assert_eq!(plaintext.best_framework, "gin");
}

#[test]
fn test_analysis_reads_latency_columns() {
    let root = populated_root();
    let data = load_results(root.path(), &AggregateConfig::default());
    let analysis = create_framework_analysis(&data);

    let gin = analysis.get("gin").unwrap();
    assert_eq!(gin.total_tests, 2);
    assert_eq!(gin.avg_latency_ms, 1.05);
    assert_eq!(gin.avg_p99_ms, 3.75);
    assert_eq!(gin.best_scenario, "plaintext");
    assert!(gin.consistency_score > 0.0 && gin.consistency_score <= 1.0);
}

// =============================================================================
// Artifacts
// =============================================================================

#[test]
fn test_pipeline_writes_artifacts() {
    let root = populated_root();
    let (report, artifacts) = completed(root.path());

    assert_eq!(report.summary.total_frameworks, 3);
    assert_eq!(report.summary.total_scenarios, 2);
    assert_eq!(report.summary.top_performer.as_deref(), Some("gin"));

    let ranking = fs::read_to_string(&artifacts.ranking).unwrap();
    assert!(ranking.starts_with("Framework,avg_rps,std_rps,min_rps,max_rps,rank\n"));

    let comparison = fs::read_to_string(&artifacts.comparison).unwrap();
    assert!(comparison.starts_with(
        "Scenario,echo,fiber,gin,best_framework,best_rps,worst_rps,rps_range,performance_gap_pct\n"
    ));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&artifacts.report).unwrap()).unwrap();
    for key in [
        "generated_at",
        "summary",
        "ranking",
        "scenario_comparison",
        "framework_analysis",
    ] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
    assert_eq!(json["summary"]["total_frameworks"], 3);
}

#[test]
fn test_repeat_runs_produce_identical_tables() {
    let root = populated_root();
    let (_, first) = completed(root.path());
    let ranking = fs::read(&first.ranking).unwrap();
    let comparison = fs::read(&first.comparison).unwrap();
    let analysis = fs::read(&first.analysis).unwrap();

    let (_, second) = completed(root.path());
    assert_eq!(fs::read(&second.ranking).unwrap(), ranking);
    assert_eq!(fs::read(&second.comparison).unwrap(), comparison);
    assert_eq!(fs::read(&second.analysis).unwrap(), analysis);
}

#[test]
fn test_single_framework_comparison_is_header_only() {
    let dir = TempDir::new().unwrap();
    write_summary(
        dir.path(),
        "gin",
        &["gin,json,1,1,100,1ms,1ms,1ms,2025-01-01T00:00:00"],
    );
    let (report, artifacts) = completed(dir.path());

    assert!(report.scenario_comparison.is_insufficient());
    assert_eq!(report.summary.performance_gap, 0.0);
    assert_eq!(
        fs::read_to_string(&artifacts.comparison).unwrap(),
        "Scenario,best_framework,best_rps,worst_rps,rps_range,performance_gap_pct\n"
    );
}

// =============================================================================
// Loader robustness
// =============================================================================

#[test]
fn test_bad_file_does_not_hide_good_file() {
    let root = populated_root();
    let broken = root.path().join("broken");
    fs::create_dir_all(&broken).unwrap();
    fs::write(broken.join("summary.csv"), "Name,Value\nfoo,1\n").unwrap();

    let data = load_results(root.path(), &AggregateConfig::default());
    assert_eq!(data.len(), 5);
    assert!(data.frameworks().iter().all(|f| *f != "foo"));
}

#[test]
fn test_nonexistent_root_is_no_data() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let outcome = pipeline::run(&missing, &AggregateConfig::default()).unwrap();
    assert_eq!(outcome, PipelineOutcome::NoData);
    assert!(!missing.exists());
}

#[test]
fn test_artifacts_are_not_reloaded() {
    let root = populated_root();
    completed(root.path());
    let data = load_results(root.path(), &AggregateConfig::default());
    assert_eq!(data.len(), 5);
}
