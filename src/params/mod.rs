//! Calculator inputs, caller-side limits and engine configuration

mod inputs;
mod limits;
pub mod loader;

pub use inputs::{
    FreedomParams, GoalParams, InflationParams, LumpsumParams, SipParams, TransferParams,
    WithdrawalParams,
};
pub use limits::{InputLimits, Validate};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::projection::DEFAULT_FREEDOM_HORIZON_YEARS;

/// Settings shared by every calculator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ceiling of the financial-independence horizon search (years)
    pub freedom_horizon_years: u32,

    /// Input ceilings applied before a request reaches the engine
    pub limits: InputLimits,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            freedom_horizon_years: DEFAULT_FREEDOM_HORIZON_YEARS,
            limits: InputLimits::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from the default location (config/engine.json)
    pub fn from_json() -> Result<Self> {
        Self::from_json_path(Path::new(loader::DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from a specific JSON file
    pub fn from_json_path(path: &Path) -> Result<Self> {
        loader::load_engine_config(path)
    }
}
