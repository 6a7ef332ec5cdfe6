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

//! Console summary of a benchmark report.

use crate::report::Report;

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];
const OTHER_PLACE: &str = "📊";

/// Renders the human-readable summary of a report.
pub fn render_summary(report: &Report) -> String {
    let mut out = String::new();
    let rule = "=".repeat(80);

    out.push_str(&format!("\n{}\n", rule));
    out.push_str("COMPREHENSIVE BENCHMARK SUMMARY\n");
    out.push_str(&format!("{}\n", rule));

    if report.ranking.is_empty() {
        out.push_str("No data available for summary\n");
        return out;
    }

    out.push_str("\nPERFORMANCE RANKING\n");
    out.push_str(&format!("{}\n", "-".repeat(40)));
    for (index, entry) in report.ranking.entries().iter().enumerate() {
        let marker = MEDALS.get(index).copied().unwrap_or(OTHER_PLACE);
        out.push_str(&format!(
            "{} {}. {}: {} RPS (±{})\n",
            marker,
            entry.rank,
            entry.framework,
            format_thousands(entry.avg_rps),
            format_thousands(entry.std_rps)
        ));
    }

    if let Some(top) = report.ranking.top() {
        out.push_str(&format!("\nTOP PERFORMER: {}\n", top.framework));
        out.push_str(&format!("   Average RPS: {}\n", format_thousands(top.avg_rps)));
        if let Some(profile) = report.framework_analysis.get(&top.framework) {
            out.push_str(&format!("   Best Scenario: {}\n", profile.best_scenario));
            out.push_str(&format!(
                "   Consistency Score: {:.3}\n",
                profile.consistency_score
            ));
        }
    }

    out.push_str("\nSCENARIO INSIGHTS\n");
    out.push_str(&format!("{}\n", "-".repeat(40)));
    if report.scenario_comparison.is_insufficient() {
        out.push_str("   Insufficient data for scenario comparison (need multiple frameworks)\n");
    } else {
        for row in report.scenario_comparison.rows() {
            out.push_str(&format!(
                "   {}: {} ({} RPS, {:.1}% gap)\n",
                row.scenario,
                row.best_framework,
                format_thousands(row.best_rps),
                row.performance_gap_pct
            ));
        }
    }

    out.push_str(&format!("\n{}\n", rule));
    out
}

/// Prints the summary to stdout.
pub fn print_summary(report: &Report) {
    print!("{}", render_summary(report));
}

/// Formats a value rounded to a whole number with `,` thousands separators.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
