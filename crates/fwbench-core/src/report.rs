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

//! The combined benchmark report.

use crate::analysis::FrameworkAnalysis;
use crate::comparison::ScenarioComparison;
use crate::ranking::Ranking;
use crate::stats::round_to;
use serde::Serialize;

/// Timestamp layout of `generated_at` (ISO-8601, microsecond precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Headline numbers of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    /// Number of ranked frameworks.
    pub total_frameworks: usize,
    /// Number of scenario comparison rows.
    pub total_scenarios: usize,
    /// Rank-1 framework, if any.
    pub top_performer: Option<String>,
    /// Mean RPS of rank 1 minus mean RPS of the last rank; 0 with fewer
    /// than two frameworks.
    pub performance_gap: f64,
}

impl ReportSummary {
    /// Derives the summary from the ranking and comparison.
    pub fn from_parts(ranking: &Ranking, comparison: &ScenarioComparison) -> Self {
        let performance_gap = match (ranking.top(), ranking.bottom()) {
            (Some(top), Some(bottom)) if ranking.len() > 1 => {
                round_to(top.avg_rps - bottom.avg_rps, 2)
            }
            _ => 0.0,
        };

        Self {
            total_frameworks: ranking.len(),
            total_scenarios: comparison.len(),
            top_performer: ranking.top().map(|e| e.framework.clone()),
            performance_gap,
        }
    }
}

/// Everything one aggregation run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Local generation time, see [`TIMESTAMP_FORMAT`].
    pub generated_at: String,
    /// Headline numbers.
    pub summary: ReportSummary,
    /// Framework ranking.
    pub ranking: Ranking,
    /// Scenario comparison.
    pub scenario_comparison: ScenarioComparison,
    /// Per-framework profiles.
    pub framework_analysis: FrameworkAnalysis,
}

impl Report {
    /// Assembles a report stamped with the current local time.
    pub fn generate(
        ranking: Ranking,
        scenario_comparison: ScenarioComparison,
        framework_analysis: FrameworkAnalysis,
    ) -> Self {
        let generated_at = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::with_timestamp(generated_at, ranking, scenario_comparison, framework_analysis)
    }

    /// Assembles a report with an explicit timestamp.
    pub fn with_timestamp(
        generated_at: impl Into<String>,
        ranking: Ranking,
        scenario_comparison: ScenarioComparison,
        framework_analysis: FrameworkAnalysis,
    ) -> Self {
        let summary = ReportSummary::from_parts(&ranking, &scenario_comparison);
        Self {
            generated_at: generated_at.into(),
            summary,
            ranking,
            scenario_comparison,
            framework_analysis,
        }
    }

    /// True when the report has no ranked frameworks.
    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        create_framework_analysis, create_performance_ranking, create_scenario_comparison,
        Dataset, Record,
    };

    fn report_for(rows: &[(&str, &str, f64)]) -> Report {
        let data: Dataset = rows
            .iter()
            .map(|(fw, sc, rps)| Record::new(*fw, *sc, *rps, "summary.csv"))
            .collect();
        Report::with_timestamp(
            "2025-01-01T00:00:00.000000",
            create_performance_ranking(&data),
            create_scenario_comparison(&data),
            create_framework_analysis(&data),
        )
    }

    #[test]
    fn test_summary_with_several_frameworks() {
        let report = report_for(&[
            ("A", "json", 1000.0),
            ("B", "json", 2000.0),
            ("C", "json", 1500.0),
            ("A", "plaintext", 1000.0),
        ]);
        assert_eq!(report.summary.total_frameworks, 3);
        assert_eq!(report.summary.total_scenarios, 2);
        assert_eq!(report.summary.top_performer.as_deref(), Some("B"));
        assert_eq!(report.summary.performance_gap, 1000.0);
    }

    #[test]
    fn test_summary_with_one_framework() {
        let report = report_for(&[("A", "json", 1000.0)]);
        assert_eq!(report.summary.top_performer.as_deref(), Some("A"));
        assert_eq!(report.summary.performance_gap, 0.0);
        assert_eq!(report.summary.total_scenarios, 0);
    }

    #[test]
    fn test_empty_report() {
        let report = report_for(&[]);
        assert!(report.is_empty());
        assert_eq!(report.summary.top_performer, None);
        assert_eq!(report.summary.performance_gap, 0.0);
    }

    #[test]
    fn test_serialized_layout() {
        let report = report_for(&[("A", "json", 100.0), ("B", "json", 50.0)]);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["generated_at"], "2025-01-01T00:00:00.000000");
        assert_eq!(value["summary"]["top_performer"], "A");
        assert_eq!(value["ranking"]["A"]["rank"], 1);
        assert_eq!(value["scenario_comparison"]["json"]["rps_range"], 50.0);
        assert_eq!(value["framework_analysis"]["B"]["total_tests"], 1);
    }

    #[test]
    fn test_generated_timestamp_format() {
        let report = Report::generate(
            Ranking::default(),
            ScenarioComparison::InsufficientData { framework_count: 0 },
            FrameworkAnalysis::default(),
        );
        assert!(
            chrono::NaiveDateTime::parse_from_str(&report.generated_at, TIMESTAMP_FORMAT).is_ok()
        );
    }
}
