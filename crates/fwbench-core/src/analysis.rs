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

//! Per-framework performance profiles.

use crate::dataset::{group_ordered, Dataset, Record};
use crate::duration::parse_duration_ms;
use crate::stats::{mean, round_to, Summary};
use serde::ser::{Serialize, Serializer};

/// Throughput, latency and stability profile of one framework.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FrameworkProfile {
    /// Framework name. Serialized as the map key of [`FrameworkAnalysis`].
    #[serde(skip)]
    pub framework: String,
    /// Mean requests per second.
    pub avg_rps: f64,
    /// Population standard deviation of requests per second.
    pub std_rps: f64,
    /// Mean of the mean-latency column in milliseconds (0 when absent).
    pub avg_latency_ms: f64,
    /// Mean of the p99-latency column in milliseconds (0 when absent).
    pub avg_p99_ms: f64,
    /// Scenario with the highest mean throughput.
    pub best_scenario: String,
    /// Scenario with the lowest mean throughput.
    pub worst_scenario: String,
    /// `1 - std_rps / avg_rps`, or 0 when `avg_rps` is 0.
    pub consistency_score: f64,
    /// Number of records for this framework.
    pub total_tests: usize,
}

/// Profiles of all frameworks in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameworkAnalysis {
    profiles: Vec<FrameworkProfile>,
}

impl FrameworkAnalysis {
    /// Profiles in first-appearance order.
    pub fn profiles(&self) -> &[FrameworkProfile] {
        &self.profiles
    }

    /// Looks up a framework by name.
    pub fn get(&self, framework: &str) -> Option<&FrameworkProfile> {
        self.profiles.iter().find(|p| p.framework == framework)
    }

    /// Number of profiled frameworks.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True when no framework was profiled.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Serialize for FrameworkAnalysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.profiles.iter().map(|p| (&p.framework, p)))
    }
}

/// Builds a profile for every framework in the dataset.
///
/// Records without a latency value count as `0.0` ms, so the profile shape
/// is the same whether or not the source files had latency columns.
pub fn create_framework_analysis(dataset: &Dataset) -> FrameworkAnalysis {
    let profiles = dataset
        .frameworks()
        .into_iter()
        .filter_map(|framework| {
            let records: Vec<&Record> = dataset.for_framework(framework).collect();
            profile(framework, &records)
        })
        .collect();

    FrameworkAnalysis { profiles }
}

fn profile(framework: &str, records: &[&Record]) -> Option<FrameworkProfile> {
    let rps: Vec<f64> = records.iter().map(|r| r.requests_per_sec).collect();
    let summary = Summary::from_values(&rps)?;

    let latencies: Vec<f64> = records
        .iter()
        .map(|r| parse_duration_ms(r.latency_mean.as_deref()))
        .collect();
    let p99s: Vec<f64> = records
        .iter()
        .map(|r| parse_duration_ms(r.latency_p99.as_deref()))
        .collect();

    let by_scenario: Vec<(&str, f64)> = group_ordered(
        records.iter().copied(),
        |r| r.scenario.as_str(),
        |r| r.requests_per_sec,
    )
    .into_iter()
    .map(|(scenario, samples)| (scenario, mean(&samples)))
    .collect();

    let (first, rest) = by_scenario.split_first()?;
    let (mut best, mut worst) = (first, first);
    for entry in rest {
        if entry.1 > best.1 {
            best = entry;
        }
        if entry.1 < worst.1 {
            worst = entry;
        }
    }

    let consistency_score = if summary.mean > 0.0 {
        1.0 - summary.std_dev / summary.mean
    } else {
        0.0
    };

    Some(FrameworkProfile {
        framework: framework.to_string(),
        avg_rps: round_to(summary.mean, 2),
        std_rps: round_to(summary.std_dev, 2),
        avg_latency_ms: round_to(mean(&latencies), 2),
        avg_p99_ms: round_to(mean(&p99s), 2),
        best_scenario: best.0.to_string(),
        worst_scenario: worst.0.to_string(),
        consistency_score: round_to(consistency_score, 3),
        total_tests: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fw: &str, scenario: &str, rps: f64) -> Record {
        Record::new(fw, scenario, rps, "summary.csv")
    }

    #[test]
    fn test_constant_throughput_is_fully_consistent() {
        let data: Dataset = (0..3).map(|_| record("A", "json", 100.0)).collect();
        let analysis = create_framework_analysis(&data);
        let profile = analysis.get("A").unwrap();

        assert_eq!(profile.std_rps, 0.0);
        assert_eq!(profile.consistency_score, 1.0);
        assert_eq!(profile.total_tests, 3);
    }

    #[test]
    fn test_single_record() {
        let data: Dataset = vec![record("A", "json", 100.0)].into_iter().collect();
        let profile = create_framework_analysis(&data).get("A").cloned().unwrap();
        assert_eq!(profile.std_rps, 0.0);
        assert_eq!(profile.consistency_score, 1.0);
        assert_eq!(profile.best_scenario, "json");
        assert_eq!(profile.worst_scenario, "json");
    }

    #[test]
    fn test_zero_throughput_has_zero_consistency() {
        let data: Dataset = vec![record("A", "json", 0.0)].into_iter().collect();
        let profile = create_framework_analysis(&data).get("A").cloned().unwrap();
        assert_eq!(profile.consistency_score, 0.0);
    }

    #[test]
    fn test_best_and_worst_scenarios() {
        let data: Dataset = vec![
            record("A", "json", 100.0),
            record("A", "plaintext", 400.0),
            record("A", "json", 200.0),
            record("A", "upload", 50.0),
            record("B", "upload", 9999.0),
        ]
        .into_iter()
        .collect();
        let analysis = create_framework_analysis(&data);
        let a = analysis.get("A").unwrap();

        assert_eq!(a.best_scenario, "plaintext");
        assert_eq!(a.worst_scenario, "upload");
        assert_eq!(a.total_tests, 4);
        assert_eq!(a.avg_rps, 187.5);
        assert_eq!(analysis.len(), 2);
    }

    #[test]
    fn test_consistency_uses_population_std() {
        let data: Dataset = vec![record("A", "json", 50.0), record("A", "json", 150.0)]
            .into_iter()
            .collect();
        let profile = create_framework_analysis(&data).get("A").cloned().unwrap();
        assert_eq!(profile.std_rps, 50.0);
        assert_eq!(profile.consistency_score, 0.5);
    }

    #[test]
    fn test_latency_parsing() {
        let data: Dataset = vec![
            record("A", "json", 100.0).with_latency("1.5ms", "2s"),
            record("A", "json", 100.0).with_latency("500µs", "1s"),
        ]
        .into_iter()
        .collect();
        let profile = create_framework_analysis(&data).get("A").cloned().unwrap();
        assert_eq!(profile.avg_latency_ms, 1.0);
        assert_eq!(profile.avg_p99_ms, 1500.0);
    }

    #[test]
    fn test_missing_latency_defaults_to_zero() {
        let data: Dataset = vec![record("A", "json", 100.0)].into_iter().collect();
        let profile = create_framework_analysis(&data).get("A").cloned().unwrap();
        assert_eq!(profile.avg_latency_ms, 0.0);
        assert_eq!(profile.avg_p99_ms, 0.0);
    }

    #[test]
    fn test_serialized_shape_keeps_latency_fields() {
        let data: Dataset = vec![record("A", "json", 100.0)].into_iter().collect();
        let value = serde_json::to_value(create_framework_analysis(&data)).unwrap();
        let a = &value["A"];
        assert_eq!(a["avg_latency_ms"], 0.0);
        assert_eq!(a["avg_p99_ms"], 0.0);
        assert_eq!(a["best_scenario"], "json");
        assert_eq!(a["total_tests"], 1);
        assert!(a.get("framework").is_none());
    }
}
