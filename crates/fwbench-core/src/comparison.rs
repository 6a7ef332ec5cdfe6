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

//! Scenario × framework throughput comparison.
//!
//! The comparison is a cross-tabulation: one row per scenario, one column
//! per framework, each cell the mean requests per second of that pair.
//! Pairs that were never measured are absent, not zero, and take no part in
//! the best/worst computation of their row.
//!
//! Comparing needs at least two frameworks. With fewer the result is
//! [`ScenarioComparison::InsufficientData`], which callers should present as
//! an informational message.

use crate::dataset::{group_ordered, Dataset};
use crate::stats::{mean, round_to};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Minimum number of distinct frameworks for a meaningful comparison.
pub const MIN_FRAMEWORKS: usize = 2;

/// One scenario row of the comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRow {
    /// Scenario name.
    pub scenario: String,
    /// Mean requests per second per framework, in column order. Only
    /// measured frameworks appear.
    pub values: Vec<(String, f64)>,
    /// Framework with the highest mean (first column wins ties).
    pub best_framework: String,
    /// Highest mean.
    pub best_rps: f64,
    /// Lowest mean.
    pub worst_rps: f64,
    /// `best_rps - worst_rps`.
    pub rps_range: f64,
    /// `(best - worst) / worst * 100`, or `0` when `worst_rps` is zero.
    pub performance_gap_pct: f64,
}

impl ScenarioRow {
    /// Mean requests per second of `framework`, if measured.
    pub fn value(&self, framework: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == framework)
            .map(|(_, rps)| *rps)
    }
}

/// Serialized as `{ <framework>: rps, ..., best_framework, best_rps, ... }`.
impl Serialize for ScenarioRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 5))?;
        for (framework, rps) in &self.values {
            map.serialize_entry(framework, rps)?;
        }
        map.serialize_entry("best_framework", &self.best_framework)?;
        map.serialize_entry("best_rps", &self.best_rps)?;
        map.serialize_entry("worst_rps", &self.worst_rps)?;
        map.serialize_entry("rps_range", &self.rps_range)?;
        map.serialize_entry("performance_gap_pct", &self.performance_gap_pct)?;
        map.end()
    }
}

/// The full comparison table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonTable {
    /// Framework columns in first-appearance order.
    pub frameworks: Vec<String>,
    /// Scenario rows in first-appearance order.
    pub rows: Vec<ScenarioRow>,
}

/// Outcome of [`create_scenario_comparison`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioComparison {
    /// Fewer than [`MIN_FRAMEWORKS`] frameworks were present.
    InsufficientData {
        /// Number of distinct frameworks found.
        framework_count: usize,
    },
    /// A table with at least two framework columns.
    Compared(ComparisonTable),
}

impl ScenarioComparison {
    /// Rows of the table; empty on the insufficient-data path.
    pub fn rows(&self) -> &[ScenarioRow] {
        match self {
            ScenarioComparison::InsufficientData { .. } => &[],
            ScenarioComparison::Compared(table) => &table.rows,
        }
    }

    /// Framework columns; empty on the insufficient-data path.
    pub fn frameworks(&self) -> &[String] {
        match self {
            ScenarioComparison::InsufficientData { .. } => &[],
            ScenarioComparison::Compared(table) => &table.frameworks,
        }
    }

    /// Looks up a scenario row.
    pub fn get(&self, scenario: &str) -> Option<&ScenarioRow> {
        self.rows().iter().find(|row| row.scenario == scenario)
    }

    /// True when the comparison could not be made.
    pub fn is_insufficient(&self) -> bool {
        matches!(self, ScenarioComparison::InsufficientData { .. })
    }

    /// Number of scenario rows.
    pub fn len(&self) -> usize {
        self.rows().len()
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

/// Serialized as `{ scenario: row }` in scenario order; `{}` when
/// insufficient.
impl Serialize for ScenarioComparison {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.rows().iter().map(|row| (&row.scenario, row)))
    }
}

/// Builds the scenario comparison.
///
/// Cell means are rounded to two decimals; row statistics are derived from
/// the rounded cells, and the gap percentage is rounded to one decimal.
///
/// # Examples
///
/// ```
/// use fwbench_core::{create_scenario_comparison, Dataset, Record};
///
/// let data: Dataset = vec![
///     Record::new("A", "json", 100.0, "summary.csv"),
///     Record::new("B", "json", 50.0, "summary.csv"),
/// ]
/// .into_iter()
/// .collect();
///
/// let comparison = create_scenario_comparison(&data);
/// let row = comparison.get("json").unwrap();
/// assert_eq!(row.best_framework, "A");
/// assert_eq!(row.performance_gap_pct, 100.0);
/// ```
pub fn create_scenario_comparison(dataset: &Dataset) -> ScenarioComparison {
    let frameworks = dataset.frameworks();
    if frameworks.len() < MIN_FRAMEWORKS {
        return ScenarioComparison::InsufficientData {
            framework_count: frameworks.len(),
        };
    }

    let rows = dataset
        .scenarios()
        .into_iter()
        .filter_map(|scenario| {
            let cells = group_ordered(
                dataset.for_scenario(scenario),
                |r| r.framework.as_str(),
                |r| r.requests_per_sec,
            );

            // Cells follow the table's column order, not the scenario's.
            let values: Vec<(String, f64)> = frameworks
                .iter()
                .filter_map(|fw| {
                    cells
                        .iter()
                        .find(|(name, _)| name == fw)
                        .map(|(_, samples)| (fw.to_string(), round_to(mean(samples), 2)))
                })
                .collect();

            build_row(scenario, values)
        })
        .collect();

    ScenarioComparison::Compared(ComparisonTable {
        frameworks: frameworks.into_iter().map(str::to_string).collect(),
        rows,
    })
}

/// Derives the row statistics from the framework cells alone.
fn build_row(scenario: &str, values: Vec<(String, f64)>) -> Option<ScenarioRow> {
    let (first, rest) = values.split_first()?;

    let mut best = first;
    let mut worst_rps = first.1;
    for cell in rest {
        if cell.1 > best.1 {
            best = cell;
        }
        worst_rps = worst_rps.min(cell.1);
    }

    let best_framework = best.0.clone();
    let best_rps = best.1;
    let performance_gap_pct = if worst_rps == 0.0 {
        0.0
    } else {
        round_to((best_rps - worst_rps) / worst_rps * 100.0, 1)
    };

    Some(ScenarioRow {
        scenario: scenario.to_string(),
        best_framework,
        best_rps,
        worst_rps,
        rps_range: round_to(best_rps - worst_rps, 2),
        performance_gap_pct,
        values,
    })
}
