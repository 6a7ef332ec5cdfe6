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

//! FWBench command line interface.

mod error;

use clap::Parser;
use colored::Colorize;
use error::CliError;
use fwbench_core::reporters::print_summary;
use fwbench_core::{pipeline, AggregateConfig, PipelineOutcome, DEFAULT_RESULTS_DIR};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Aggregates framework load-test results into rankings and reports.
///
/// Every `summary.csv` beneath RESULTS_DIR is merged; the ranking,
/// scenario comparison, framework analysis and combined report are written
/// back into RESULTS_DIR.
///
/// # Examples
///
/// ```bash
/// # Aggregate ./results
/// fwbench
///
/// # Aggregate another tree with debug logging
/// RUST_LOG=fwbench_core=debug fwbench runs/2025-01-01
/// ```
#[derive(Parser)]
#[command(name = "fwbench")]
#[command(author = "Dweve B.V.")]
#[command(version)]
#[command(about = "FWBench - framework benchmark result aggregation", long_about = None)]
struct Cli {
    /// Directory containing the summary.csv files
    #[arg(default_value = DEFAULT_RESULTS_DIR)]
    results_dir: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fwbench_core=info,fwbench_cli=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = AggregateConfig::default();
    info!(root = %cli.results_dir.display(), "starting aggregation");

    match pipeline::run(&cli.results_dir, &config)? {
        PipelineOutcome::NoData => {
            println!("No benchmark data found");
        }
        PipelineOutcome::Completed {
            report,
            artifacts,
            records,
        } => {
            println!(
                "{} Aggregated {} records from {}",
                "✓".green().bold(),
                records,
                cli.results_dir.display()
            );
            for path in artifacts.paths() {
                println!("  {} {}", "Saved:".green(), path.display());
            }
            print_summary(&report);
        }
    }

    Ok(())
}
