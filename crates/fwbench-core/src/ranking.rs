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

//! Per-framework throughput ranking.

use crate::dataset::{group_ordered, Dataset};
use crate::stats::{round_to, Summary};
use serde::ser::{Serialize, Serializer};

/// Aggregate throughput of one framework and its place in the ranking.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RankingEntry {
    /// Framework name. Serialized as the map key of [`Ranking`].
    #[serde(skip)]
    pub framework: String,
    /// Mean requests per second.
    pub avg_rps: f64,
    /// Population standard deviation of requests per second.
    pub std_rps: f64,
    /// Lowest observed requests per second.
    pub min_rps: f64,
    /// Highest observed requests per second.
    pub max_rps: f64,
    /// 1-based position, best first.
    pub rank: usize,
}

/// Frameworks ordered by mean throughput, best first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    entries: Vec<RankingEntry>,
}

impl Ranking {
    /// Entries in rank order.
    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    /// The rank-1 entry.
    pub fn top(&self) -> Option<&RankingEntry> {
        self.entries.first()
    }

    /// The lowest-ranked entry.
    pub fn bottom(&self) -> Option<&RankingEntry> {
        self.entries.last()
    }

    /// Looks up a framework by name.
    pub fn get(&self, framework: &str) -> Option<&RankingEntry> {
        self.entries.iter().find(|e| e.framework == framework)
    }

    /// Number of ranked frameworks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no framework was ranked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serialized as `{ framework: { avg_rps, std_rps, min_rps, max_rps, rank } }`
/// in rank order.
impl Serialize for Ranking {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|e| (&e.framework, e)))
    }
}

/// Ranks frameworks by mean requests per second.
///
/// Statistics are rounded to two decimals and the ranking is decided on the
/// rounded mean. The sort is stable, so frameworks with equal means keep
/// the order in which they first appear in the dataset.
///
/// # Examples
///
/// ```
/// use fwbench_core::{create_performance_ranking, Dataset, Record};
///
/// let data: Dataset = vec![
///     Record::new("A", "json", 1000.0, "summary.csv"),
///     Record::new("B", "json", 2000.0, "summary.csv"),
/// ]
/// .into_iter()
/// .collect();
///
/// let ranking = create_performance_ranking(&data);
/// assert_eq!(ranking.top().unwrap().framework, "B");
/// assert_eq!(ranking.get("A").unwrap().rank, 2);
/// ```
pub fn create_performance_ranking(dataset: &Dataset) -> Ranking {
    let groups = group_ordered(
        dataset.records(),
        |r| r.framework.as_str(),
        |r| r.requests_per_sec,
    );

    let mut entries: Vec<RankingEntry> = groups
        .into_iter()
        .filter_map(|(framework, values)| {
            let summary = Summary::from_values(&values)?;
            Some(RankingEntry {
                framework: framework.to_string(),
                avg_rps: round_to(summary.mean, 2),
                std_rps: round_to(summary.std_dev, 2),
                min_rps: round_to(summary.min, 2),
                max_rps: round_to(summary.max, 2),
                rank: 0,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.avg_rps.total_cmp(&a.avg_rps));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index + 1;
    }

    Ranking { entries }
}
