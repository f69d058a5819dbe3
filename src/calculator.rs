//! Calculator registry and request dispatch
//!
//! Each calculator is addressed by the slug of its page. A request carries the
//! slug in its `calculator` field next to the calculator's own parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};
use crate::params::{
    EngineConfig, FreedomParams, GoalParams, InflationParams, LumpsumParams, SipParams,
    TransferParams, Validate, WithdrawalParams,
};
use crate::projection::{
    adjust_for_inflation, compute_freedom_index_within, project_lumpsum, project_sip,
    simulate_transfer, simulate_withdrawal, solve_goal, FreedomIndex, GoalPlan,
    InflationAdjusted, LumpsumProjection, SipProjection, TransferProjection,
    WithdrawalProjection,
};

/// The available calculators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Calculator {
    SmartSipOptimizer,
    GoalBasedSipPlanner,
    FinancialFreedomIndex,
    SystematicTransferPlan,
    SystematicWithdrawalPlan,
    Lumpsum,
    InflationReal,
}

impl Calculator {
    pub const ALL: [Calculator; 7] = [
        Calculator::SmartSipOptimizer,
        Calculator::GoalBasedSipPlanner,
        Calculator::FinancialFreedomIndex,
        Calculator::SystematicTransferPlan,
        Calculator::SystematicWithdrawalPlan,
        Calculator::Lumpsum,
        Calculator::InflationReal,
    ];

    /// URL slug of the calculator page
    pub fn slug(&self) -> &'static str {
        match self {
            Calculator::SmartSipOptimizer => "smart-sip-optimizer",
            Calculator::GoalBasedSipPlanner => "goal-based-sip-planner",
            Calculator::FinancialFreedomIndex => "financial-freedom-index",
            Calculator::SystematicTransferPlan => "systematic-transfer-plan",
            Calculator::SystematicWithdrawalPlan => "systematic-withdrawal-plan",
            Calculator::Lumpsum => "lumpsum",
            Calculator::InflationReal => "inflation-real",
        }
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            Calculator::SmartSipOptimizer => "Smart SIP Optimizer",
            Calculator::GoalBasedSipPlanner => "Goal-Based SIP Planner",
            Calculator::FinancialFreedomIndex => "Financial Freedom Index",
            Calculator::SystematicTransferPlan => "Systematic Transfer Plan",
            Calculator::SystematicWithdrawalPlan => "Systematic Withdrawal Plan",
            Calculator::Lumpsum => "Lumpsum Calculator",
            Calculator::InflationReal => "Inflation Impact & Real Return",
        }
    }

    /// A request for this calculator with every parameter at its default
    pub fn default_request(&self) -> CalculatorRequest {
        match self {
            Calculator::SmartSipOptimizer => CalculatorRequest::SmartSipOptimizer(SipParams::default()),
            Calculator::GoalBasedSipPlanner => CalculatorRequest::GoalBasedSipPlanner(GoalParams::default()),
            Calculator::FinancialFreedomIndex => CalculatorRequest::FinancialFreedomIndex(FreedomParams::default()),
            Calculator::SystematicTransferPlan => CalculatorRequest::SystematicTransferPlan(TransferParams::default()),
            Calculator::SystematicWithdrawalPlan => CalculatorRequest::SystematicWithdrawalPlan(WithdrawalParams::default()),
            Calculator::Lumpsum => CalculatorRequest::Lumpsum(LumpsumParams::default()),
            Calculator::InflationReal => CalculatorRequest::InflationReal(InflationParams::default()),
        }
    }
}

impl fmt::Display for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Calculator {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        Calculator::ALL
            .iter()
            .copied()
            .find(|c| c.slug() == s)
            .ok_or_else(|| ProjectionError::UnknownCalculator(s.to_string()))
    }
}

/// A calculator invocation: the slug plus that calculator's parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "kebab-case")]
pub enum CalculatorRequest {
    SmartSipOptimizer(SipParams),
    GoalBasedSipPlanner(GoalParams),
    FinancialFreedomIndex(FreedomParams),
    SystematicTransferPlan(TransferParams),
    SystematicWithdrawalPlan(WithdrawalParams),
    Lumpsum(LumpsumParams),
    InflationReal(InflationParams),
}

impl CalculatorRequest {
    pub fn calculator(&self) -> Calculator {
        match self {
            CalculatorRequest::SmartSipOptimizer(_) => Calculator::SmartSipOptimizer,
            CalculatorRequest::GoalBasedSipPlanner(_) => Calculator::GoalBasedSipPlanner,
            CalculatorRequest::FinancialFreedomIndex(_) => Calculator::FinancialFreedomIndex,
            CalculatorRequest::SystematicTransferPlan(_) => Calculator::SystematicTransferPlan,
            CalculatorRequest::SystematicWithdrawalPlan(_) => Calculator::SystematicWithdrawalPlan,
            CalculatorRequest::Lumpsum(_) => Calculator::Lumpsum,
            CalculatorRequest::InflationReal(_) => Calculator::InflationReal,
        }
    }

    /// Check the parameters against the configured input limits
    pub fn validate(&self, config: &EngineConfig) -> Result<()> {
        let limits = &config.limits;
        match self {
            CalculatorRequest::SmartSipOptimizer(p) => p.validate(limits),
            CalculatorRequest::GoalBasedSipPlanner(p) => p.validate(limits),
            CalculatorRequest::FinancialFreedomIndex(p) => p.validate(limits),
            CalculatorRequest::SystematicTransferPlan(p) => p.validate(limits),
            CalculatorRequest::SystematicWithdrawalPlan(p) => p.validate(limits),
            CalculatorRequest::Lumpsum(p) => p.validate(limits),
            CalculatorRequest::InflationReal(p) => p.validate(limits),
        }
    }

    /// Run the calculator. No validation happens here.
    pub fn run(&self, config: &EngineConfig) -> CalculatorOutput {
        match self {
            CalculatorRequest::SmartSipOptimizer(p) => CalculatorOutput::SmartSipOptimizer(project_sip(p)),
            CalculatorRequest::GoalBasedSipPlanner(p) => CalculatorOutput::GoalBasedSipPlanner(solve_goal(p)),
            CalculatorRequest::FinancialFreedomIndex(p) => CalculatorOutput::FinancialFreedomIndex(
                compute_freedom_index_within(p, config.freedom_horizon_years),
            ),
            CalculatorRequest::SystematicTransferPlan(p) => CalculatorOutput::SystematicTransferPlan(simulate_transfer(p)),
            CalculatorRequest::SystematicWithdrawalPlan(p) => CalculatorOutput::SystematicWithdrawalPlan(simulate_withdrawal(p)),
            CalculatorRequest::Lumpsum(p) => CalculatorOutput::Lumpsum(project_lumpsum(p)),
            CalculatorRequest::InflationReal(p) => CalculatorOutput::InflationReal(adjust_for_inflation(p)),
        }
    }
}

/// Result of any calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalculatorOutput {
    SmartSipOptimizer(SipProjection),
    GoalBasedSipPlanner(GoalPlan),
    FinancialFreedomIndex(FreedomIndex),
    SystematicTransferPlan(TransferProjection),
    SystematicWithdrawalPlan(WithdrawalProjection),
    Lumpsum(LumpsumProjection),
    InflationReal(InflationAdjusted),
}

impl CalculatorOutput {
    /// The headline figures charted for each calculator, in display order
    pub fn headline(&self) -> Vec<(&'static str, f64)> {
        match self {
            CalculatorOutput::SmartSipOptimizer(r) => vec![
                ("Your Investment", r.flat.invested),
                ("Future value of your investment", r.flat.fv),
                ("Step-up Investment", r.stepup.invested),
                ("Step-up Future Value", r.stepup.fv),
            ],
            CalculatorOutput::GoalBasedSipPlanner(r) => vec![
                ("Your Total Investment", r.invested),
                ("Monthly SIP Amount", r.monthly),
            ],
            CalculatorOutput::FinancialFreedomIndex(r) => {
                let mut metrics = vec![("Financial Freedom Index", r.ffi_percent)];
                if let Some(years) = r.years {
                    metrics.push(("Years to Independence", years as f64));
                }
                metrics
            }
            CalculatorOutput::SystematicTransferPlan(r) => vec![
                ("Transferred", r.total_transferred),
                ("Value in Equity", r.fv_target),
                ("Total Value", r.total_fv),
            ],
            CalculatorOutput::SystematicWithdrawalPlan(r) => {
                let mut metrics = vec![
                    ("Final Investment Value", r.final_totals.balance),
                    ("Total Interest Earned", r.final_totals.total_interest),
                    ("Total Withdrawn", r.final_totals.total_withdrawn),
                ];
                if let Some(month) = r.depleted_at {
                    metrics.push(("Depleted At Month", month as f64));
                }
                metrics
            }
            CalculatorOutput::Lumpsum(r) => vec![
                ("Lumpsum Amount", r.principal),
                ("Estimated Future Value", r.future_value),
            ],
            CalculatorOutput::InflationReal(r) => vec![
                ("Real Return (p.a.)", r.real_return_percent),
                ("Nominal FV", r.nominal_fv),
                ("Real FV (today's money)", r.real_fv),
            ],
        }
    }
}
