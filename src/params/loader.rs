//! JSON loaders for engine configuration and request batches

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::EngineConfig;
use crate::calculator::CalculatorRequest;
use crate::error::Result;
use crate::portfolio::FinancialData;

/// Default path of the engine configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/engine.json";

/// Read and deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}

/// Load engine configuration; missing keys take their defaults
pub fn load_engine_config(path: &Path) -> Result<EngineConfig> {
    read_json(path)
}

/// Load a batch of calculator requests from a JSON array
pub fn load_requests(path: &Path) -> Result<Vec<CalculatorRequest>> {
    read_json(path)
}

/// Load a financial-data document as returned by the client API
pub fn load_financial_data(path: &Path) -> Result<FinancialData> {
    read_json(path)
}
