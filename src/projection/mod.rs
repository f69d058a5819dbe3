//! Projection engine: stateless SIP, goal, lumpsum, inflation, STP, SWP and
//! financial-freedom calculations
//!
//! Every function takes its parameter record by reference and returns a fresh
//! result; nothing is cached or shared between calls.

mod annuity;
mod cashflows;
mod freedom;
mod goal;
mod lumpsum;
pub mod rounding;
mod state;
mod transfer;
mod withdrawal;

pub use annuity::{annuity_due_fv, project_sip, stepped_contribution, SipProjection};
pub use cashflows::{GrowthSnapshot, GrowthTotals, WithdrawalSnapshot, WithdrawalTotals};
pub use freedom::{
    compute_freedom_index, compute_freedom_index_within, FreedomIndex, FreedomStatus, FFI_CAP,
};
pub use goal::{solve_goal, GoalPlan};
pub use lumpsum::{
    adjust_for_inflation, project_lumpsum, real_rate, InflationAdjusted, LumpsumProjection,
};
pub use state::{months_in_years, year_of_month, PoolState};
pub use transfer::{simulate_transfer, TransferProjection};
pub use withdrawal::{simulate_withdrawal, WithdrawalProjection};

// ============================================================================
// Engine Defaults
// ============================================================================

/// Default ceiling of the financial-independence horizon search (years)
pub const DEFAULT_FREEDOM_HORIZON_YEARS: u32 = 60;
