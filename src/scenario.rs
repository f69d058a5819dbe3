//! Scenario runner for validated single and batch calculations
//!
//! Holds the engine configuration once, then validates and runs any number of
//! calculator requests against it.

use log::{debug, warn};
use rayon::prelude::*;

use crate::calculator::{CalculatorOutput, CalculatorRequest};
use crate::error::Result;
use crate::params::EngineConfig;

/// Runner holding the shared engine configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// for rate in [8.0, 10.0, 12.0] {
///     let request = CalculatorRequest::Lumpsum(LumpsumParams { annual_return: rate, ..Default::default() });
///     let output = runner.run(&request)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    config: EngineConfig,
}

impl ScenarioRunner {
    /// Create runner with default configuration
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Create runner from a JSON configuration file
    pub fn from_json_path(path: &std::path::Path) -> Result<Self> {
        Ok(Self {
            config: EngineConfig::from_json_path(path)?,
        })
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Validate a request against the input limits, then run it
    pub fn run(&self, request: &CalculatorRequest) -> Result<CalculatorOutput> {
        request.validate(&self.config)?;
        debug!("running {}", request.calculator());
        Ok(request.run(&self.config))
    }

    /// Run many requests in parallel. Results keep the input order; a request
    /// that fails validation yields its error without affecting the others.
    pub fn run_batch(&self, requests: &[CalculatorRequest]) -> Vec<Result<CalculatorOutput>> {
        let results: Vec<_> = requests.par_iter().map(|r| self.run(r)).collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!("{} of {} requests failed validation", failed, requests.len());
        }

        results
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
