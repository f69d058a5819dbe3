//! Run a batch of calculator requests from a JSON file
//!
//! Outputs one CSV row per headline metric per scenario

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use serde::Serialize;

use wealth_projection::params::loader::load_requests;
use wealth_projection::{EngineConfig, ScenarioRunner};

#[derive(Parser)]
#[command(name = "run_batch")]
#[command(about = "Run a JSON array of calculator requests and write a long-format CSV")]
struct Args {
    /// JSON array of calculator requests
    input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "batch_output.csv")]
    output: PathBuf,

    /// Engine configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// One metric of one scenario
#[derive(Debug, Serialize)]
struct MetricRow<'a> {
    scenario: usize,
    calculator: &'a str,
    metric: &'a str,
    value: f64,
}

/// Validation failure for one scenario
#[derive(Debug, Serialize)]
struct ErrorRow {
    scenario: usize,
    calculator: String,
    error: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::from_json_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let runner = ScenarioRunner::with_config(config);

    let start = Instant::now();
    println!("Loading requests from {}...", args.input.display());
    let requests = load_requests(&args.input)
        .with_context(|| format!("loading requests {}", args.input.display()))?;
    println!("Loaded {} requests in {:?}", requests.len(), start.elapsed());

    let run_start = Instant::now();
    let results = runner.run_batch(&requests);
    println!("Calculations complete in {:?}", run_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut errors = Vec::new();

    for (scenario, (request, result)) in requests.iter().zip(&results).enumerate() {
        let calculator = request.calculator();
        match result {
            Ok(output) => {
                for (metric, value) in output.headline() {
                    writer.serialize(MetricRow {
                        scenario,
                        calculator: calculator.slug(),
                        metric,
                        value,
                    })?;
                }
            }
            Err(e) => {
                warn!("scenario {} ({}) skipped: {}", scenario, calculator, e);
                errors.push(ErrorRow {
                    scenario,
                    calculator: calculator.slug().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }
    writer.flush()?;

    println!("Results written to: {}", args.output.display());

    if !errors.is_empty() {
        let error_path = args.output.with_extension("errors.csv");
        let mut error_writer = csv::Writer::from_path(&error_path)
            .with_context(|| format!("creating {}", error_path.display()))?;
        for row in &errors {
            error_writer.serialize(row)?;
        }
        error_writer.flush()?;
        println!("{} invalid requests listed in: {}", errors.len(), error_path.display());
    }

    info!(
        "batch of {} finished in {:?} ({} failed)",
        requests.len(),
        start.elapsed(),
        errors.len()
    );
    Ok(())
}
