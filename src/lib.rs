//! Wealth Projection - financial calculators for a client advisory dashboard
//!
//! This library provides:
//! - SIP growth projections (flat and annual step-up)
//! - Goal-based SIP planning
//! - Lumpsum and inflation-adjusted (real) return projections
//! - Systematic transfer (STP) and withdrawal (SWP) simulations
//! - Financial Freedom Index and the horizon to financial independence
//! - Portfolio totals and recommended asset allocation
//! - Indian-numbering display formatting

pub mod calculator;
pub mod error;
pub mod format;
pub mod params;
pub mod portfolio;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use calculator::{Calculator, CalculatorOutput, CalculatorRequest};
pub use error::ProjectionError;
pub use params::{EngineConfig, InputLimits};
pub use portfolio::{FinancialData, RiskProfile};
pub use projection::{FreedomStatus, SipProjection, WithdrawalProjection};
pub use scenario::ScenarioRunner;
