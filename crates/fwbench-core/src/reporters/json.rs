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

//! JSON export for the framework analysis and the combined report.

use crate::error::{FwbenchError, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Exports any serializable artifact as pretty-printed JSON.
///
/// # Arguments
///
/// * `value` - The artifact to export
/// * `path` - Output file path, replaced if it exists
pub fn export_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| FwbenchError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_framework_analysis, Dataset, Record};
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_json() {
        let data: Dataset = vec![Record::new("gin", "json", 100.0, "summary.csv")]
            .into_iter()
            .collect();
        let temp = NamedTempFile::new().unwrap();

        export_json(&create_framework_analysis(&data), temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["gin"]["avg_rps"], 100.0);
        assert!(content.contains("\n  \"gin\": {"));
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = export_json(&serde_json::json!({}), &path).unwrap_err();
        assert!(matches!(err, FwbenchError::Io { .. }));
    }
}
