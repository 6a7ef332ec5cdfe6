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

//! Tabular exports of the ranking and the scenario comparison.
//!
//! Output depends only on the input tables, so exporting an unchanged
//! dataset twice produces identical bytes.

use crate::comparison::ScenarioComparison;
use crate::error::{FwbenchError, Result};
use crate::ranking::Ranking;
use std::fs;
use std::io;
use std::path::Path;

/// Derived columns appended after the framework columns of the comparison.
pub const COMPARISON_STAT_COLUMNS: [&str; 5] = [
    "best_framework",
    "best_rps",
    "worst_rps",
    "rps_range",
    "performance_gap_pct",
];

/// Header of the ranking table.
pub const RANKING_COLUMNS: [&str; 6] = [
    "Framework", "avg_rps", "std_rps", "min_rps", "max_rps", "rank",
];

/// Renders the ranking as CSV.
///
/// # Examples
///
/// ```
/// use fwbench_core::reporters::csv::ranking_to_csv;
/// use fwbench_core::{create_performance_ranking, Dataset, Record};
///
/// let data: Dataset = vec![Record::new("gin", "json", 1000.0, "summary.csv")]
///     .into_iter()
///     .collect();
/// let csv = ranking_to_csv(&create_performance_ranking(&data), b',').unwrap();
/// assert_eq!(
///     csv,
///     "Framework,avg_rps,std_rps,min_rps,max_rps,rank\ngin,1000.0,0.0,1000.0,1000.0,1\n"
/// );
/// ```
pub fn ranking_to_csv(ranking: &Ranking, delimiter: u8) -> csv::Result<String> {
    let mut wtr = writer(delimiter);
    wtr.write_record(RANKING_COLUMNS)?;

    for entry in ranking.entries() {
        wtr.write_record([
            entry.framework.clone(),
            format_float(entry.avg_rps),
            format_float(entry.std_rps),
            format_float(entry.min_rps),
            format_float(entry.max_rps),
            entry.rank.to_string(),
        ])?;
    }

    finish(wtr)
}

/// Renders the scenario comparison as CSV.
///
/// Unmeasured framework/scenario pairs are written as empty cells. On the
/// insufficient-data path only the header is written.
pub fn comparison_to_csv(comparison: &ScenarioComparison, delimiter: u8) -> csv::Result<String> {
    let mut wtr = writer(delimiter);

    let mut header = vec!["Scenario".to_string()];
    header.extend(comparison.frameworks().iter().cloned());
    header.extend(COMPARISON_STAT_COLUMNS.iter().map(|c| c.to_string()));
    wtr.write_record(&header)?;

    for row in comparison.rows() {
        let mut fields = Vec::with_capacity(header.len());
        fields.push(row.scenario.clone());
        for framework in comparison.frameworks() {
            fields.push(row.value(framework).map(format_float).unwrap_or_default());
        }
        fields.push(row.best_framework.clone());
        fields.push(format_float(row.best_rps));
        fields.push(format_float(row.worst_rps));
        fields.push(format_float(row.rps_range));
        fields.push(format_float(row.performance_gap_pct));
        wtr.write_record(&fields)?;
    }

    finish(wtr)
}

/// Writes the ranking CSV to `path`, replacing any previous file.
pub fn write_ranking_csv(ranking: &Ranking, path: &Path, delimiter: u8) -> Result<()> {
    let csv = ranking_to_csv(ranking, delimiter).map_err(|e| FwbenchError::csv(path, e))?;
    fs::write(path, csv).map_err(|e| FwbenchError::io(path, e))
}

/// Writes the comparison CSV to `path`, replacing any previous file.
pub fn write_comparison_csv(
    comparison: &ScenarioComparison,
    path: &Path,
    delimiter: u8,
) -> Result<()> {
    let csv = comparison_to_csv(comparison, delimiter).map_err(|e| FwbenchError::csv(path, e))?;
    fs::write(path, csv).map_err(|e| FwbenchError::io(path, e))
}

/// Formats a float with at least one decimal place (`1000.0`, `12.34`).
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn writer(delimiter: u8) -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new())
}

fn finish(wtr: csv::Writer<Vec<u8>>) -> csv::Result<String> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, e)))
}
