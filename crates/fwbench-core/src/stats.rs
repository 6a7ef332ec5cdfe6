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

//! Fold-style summary statistics over measurement samples.

/// Summary of a non-empty sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of samples.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation (0 for a single sample).
    pub std_dev: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
}

impl Summary {
    /// Computes the summary of `values`, or `None` when it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fwbench_core::stats::Summary;
    ///
    /// let summary = Summary::from_values(&[100.0, 200.0, 300.0]).unwrap();
    /// assert_eq!(summary.mean, 200.0);
    /// assert_eq!(summary.min, 100.0);
    /// assert_eq!(summary.max, 300.0);
    /// assert!(Summary::from_values(&[]).is_none());
    /// ```
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let (sum, min, max) = values.iter().fold(
            (0.0, f64::INFINITY, f64::NEG_INFINITY),
            |(sum, min, max), &v| (sum + v, min.min(v), max.max(v)),
        );
        let mean = sum / count as f64;

        let variance = values
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / count as f64;

        Some(Self {
            count,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        })
    }
}

/// Arithmetic mean, `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Rounds half away from zero to `places` decimal places.
///
/// Non-finite input is returned unchanged.
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_constant_sample_has_zero_spread() {
        let summary = Summary::from_values(&[100.0, 100.0, 100.0]).unwrap();
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.mean, 100.0);
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn test_single_sample_has_zero_spread() {
        let summary = Summary::from_values(&[42.0]).unwrap();
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.min, 42.0);
        assert_eq!(summary.max, 42.0);
    }

    #[test]
    fn test_population_std_dev() {
        // Population variance of [2, 4, 4, 4, 5, 5, 7, 9] is 4.
        let summary = Summary::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.std_dev, 2.0);
    }

    #[test]
    fn test_mean_of_empty() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0]), 1.5);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1234.5678, 2), 1234.57);
        assert_eq!(round_to(0.12345, 3), 0.123);
        assert_eq!(round_to(2.25, 1), 2.3);
        assert_eq!(round_to(-2.25, 1), -2.3);
        assert!(round_to(f64::NAN, 2).is_nan());
    }

    proptest! {
        #[test]
        fn prop_summary_bounds(values in prop::collection::vec(0.0f64..1.0e6, 1..50)) {
            let summary = Summary::from_values(&values).unwrap();
            prop_assert!(summary.min <= summary.mean + 1e-6);
            prop_assert!(summary.mean <= summary.max + 1e-6);
            prop_assert!(summary.std_dev >= 0.0);
            prop_assert!(summary.std_dev.is_finite());
            prop_assert_eq!(summary.count, values.len());
        }
    }
}
