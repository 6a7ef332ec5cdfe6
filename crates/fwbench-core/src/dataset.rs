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

//! Benchmark records and the unified dataset.
//!
//! A [`Dataset`] is the union of every accepted summary file. Analyzers only
//! read it. Framework and scenario listings follow first-appearance order,
//! which is the display order of every derived table.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One measured load-test run.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// System under test. Never empty.
    pub framework: String,
    /// Load-test configuration name.
    pub scenario: String,
    /// Throughput, finite and non-negative.
    pub requests_per_sec: f64,
    /// Raw mean latency string, if the file had that column.
    pub latency_mean: Option<String>,
    /// Raw p99 latency string, if the file had that column.
    pub latency_p99: Option<String>,
    /// Summary file the record was read from.
    pub source_file: PathBuf,
}

impl Record {
    /// Creates a record without latency columns.
    pub fn new(
        framework: impl Into<String>,
        scenario: impl Into<String>,
        requests_per_sec: f64,
        source_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            framework: framework.into(),
            scenario: scenario.into(),
            requests_per_sec,
            latency_mean: None,
            latency_p99: None,
            source_file: source_file.into(),
        }
    }

    /// Attaches raw latency strings.
    pub fn with_latency(
        mut self,
        mean: impl Into<String>,
        p99: impl Into<String>,
    ) -> Self {
        self.latency_mean = Some(mean.into());
        self.latency_p99 = Some(p99.into());
        self
    }
}

/// Ordered collection of records from every accepted file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends records from one source.
    pub fn extend(&mut self, records: impl IntoIterator<Item = Record>) {
        self.records.extend(records);
    }

    /// All records in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct frameworks in first-appearance order.
    pub fn frameworks(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|r| r.framework.as_str()))
    }

    /// Distinct scenarios in first-appearance order.
    pub fn scenarios(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|r| r.scenario.as_str()))
    }

    /// Distinct source files in load order.
    pub fn source_files(&self) -> Vec<&Path> {
        distinct(self.records.iter().map(|r| r.source_file.as_path()))
    }

    /// Records of one framework.
    pub fn for_framework<'a>(&'a self, framework: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
        self.records.iter().filter(move |r| r.framework == framework)
    }

    /// Records of one scenario.
    pub fn for_scenario<'a>(&'a self, scenario: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
        self.records.iter().filter(move |r| r.scenario == scenario)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Groups items by key, keeping keys in first-appearance order.
///
/// This is the explicit replacement for a table group-by: every analyzer
/// builds its `key -> samples` mapping through here.
pub(crate) fn group_ordered<'a, T, K, V>(
    items: impl IntoIterator<Item = &'a T>,
    key: K,
    value: V,
) -> Vec<(&'a str, Vec<f64>)>
where
    T: 'a,
    K: Fn(&'a T) -> &'a str,
    V: Fn(&'a T) -> f64,
{
    let mut groups: Vec<(&'a str, Vec<f64>)> = Vec::new();
    for item in items {
        let k = key(item);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, values)) => values.push(value(item)),
            None => groups.push((k, vec![value(item)])),
        }
    }
    groups
}

fn distinct<T: Eq + std::hash::Hash + Copy>(items: impl Iterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(*item)).collect()
}
