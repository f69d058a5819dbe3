//! Caller-side input ceilings and validation
//!
//! The engine accepts any numeric input. These checks belong to whoever
//! collects the inputs (CLI, batch runner, HTTP handler) and mirror the bounds
//! the calculator pages enforce.

use serde::{Deserialize, Serialize};

use super::inputs::{
    FreedomParams, GoalParams, InflationParams, LumpsumParams, SipParams, TransferParams,
    WithdrawalParams,
};
use crate::error::{ProjectionError, Result};

/// Upper bounds on calculator inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Maximum monthly SIP
    pub sip_max: f64,
    pub sip_years_max: u32,
    /// Maximum expected return for the SIP optimizer (% p.a.)
    pub sip_return_max: f64,
    /// Maximum goal amount
    pub goal_max: f64,
    pub goal_years_max: u32,
    pub goal_return_max: f64,
    /// Maximum return for the lumpsum and inflation calculators (% p.a.)
    pub lumpsum_return_max: f64,
    pub lumpsum_years_max: u32,
    /// Longest withdrawal plan (years)
    pub swp_years_max: u32,
    /// Longest transfer plan (months)
    pub stp_months_max: u32,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            sip_max: 10_000_000.0,
            sip_years_max: 50,
            sip_return_max: 50.0,
            goal_max: 500_000_000.0,
            goal_years_max: 50,
            goal_return_max: 35.0,
            lumpsum_return_max: 30.0,
            lumpsum_years_max: 50,
            swp_years_max: 50,
            stp_months_max: 600,
        }
    }
}

/// Parameter records that can be checked against [`InputLimits`]
pub trait Validate {
    fn validate(&self, limits: &InputLimits) -> Result<()>;
}

/// Finite and not negative
fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ProjectionError::invalid(field, value, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(ProjectionError::invalid(field, value, "cannot be negative"));
    }
    Ok(())
}

/// Finite, not negative, and at most `max`
fn bounded(field: &'static str, value: f64, max: f64) -> Result<()> {
    non_negative(field, value)?;
    if value > max {
        return Err(ProjectionError::invalid(field, value, format!("cannot exceed {}", max)));
    }
    Ok(())
}

fn years_within(field: &'static str, years: u32, min: u32, max: u32) -> Result<()> {
    if years < min || years > max {
        return Err(ProjectionError::invalid(
            field,
            years as f64,
            format!("must be between {} and {} years", min, max),
        ));
    }
    Ok(())
}

impl Validate for SipParams {
    fn validate(&self, limits: &InputLimits) -> Result<()> {
        bounded("sip", self.monthly_sip, limits.sip_max)?;
        bounded("ret", self.annual_return, limits.sip_return_max)?;
        years_within("yrs", self.years, 0, limits.sip_years_max)?;
        non_negative("step", self.step_up)
    }
}

impl Validate for GoalParams {
    fn validate(&self, limits: &InputLimits) -> Result<()> {
        bounded("goal", self.goal, limits.goal_max)?;
        bounded("ret", self.annual_return, limits.goal_return_max)?;
        // Tenure divides the goal; zero has no answer
        years_within("yrs", self.years, 1, limits.goal_years_max)
    }
}

impl Validate for LumpsumParams {
    fn validate(&self, limits: &InputLimits) -> Result<()> {
        non_negative("P0", self.principal)?;
        bounded("R", self.annual_return, limits.lumpsum_return_max)?;
        years_within("T", self.years, 1, limits.lumpsum_years_max)
    }
}

impl Validate for InflationParams {
    fn validate(&self, limits: &InputLimits) -> Result<()> {
        non_negative("R", self.nominal_return)?;
        non_negative("I", self.inflation)?;
        years_within("T", self.years, 1, limits.lumpsum_years_max)?;
        non_negative("P0", self.principal)
    }
}

impl Validate for TransferParams {
    fn validate(&self, limits: &InputLimits) -> Result<()> {
        non_negative("source", self.source)?;
        non_negative("transfer", self.transfer)?;
        if self.months > limits.stp_months_max {
            return Err(ProjectionError::invalid(
                "months",
                self.months as f64,
                format!("cannot exceed {} months", limits.stp_months_max),
            ));
        }
        non_negative("rd", self.debt_return)?;
        non_negative("re", self.equity_return)
    }
}

impl Validate for WithdrawalParams {
    fn validate(&self, limits: &InputLimits) -> Result<()> {
        non_negative("corpus", self.corpus)?;
        non_negative("withdrawal", self.withdrawal)?;
        non_negative("ret", self.annual_return)?;
        years_within("yrs", self.years, 0, limits.swp_years_max)
    }
}

impl Validate for FreedomParams {
    fn validate(&self, _limits: &InputLimits) -> Result<()> {
        non_negative("expense", self.monthly_expense)?;
        non_negative("passive", self.monthly_passive_income)?;
        non_negative("corpus", self.corpus)?;
        non_negative("ret", self.annual_return)?;
        non_negative("infl", self.inflation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pass() {
        let limits = InputLimits::default();
        assert!(SipParams::default().validate(&limits).is_ok());
        assert!(GoalParams::default().validate(&limits).is_ok());
        assert!(LumpsumParams::default().validate(&limits).is_ok());
        assert!(InflationParams::default().validate(&limits).is_ok());
        assert!(TransferParams::default().validate(&limits).is_ok());
        assert!(WithdrawalParams::default().validate(&limits).is_ok());
        assert!(FreedomParams::default().validate(&limits).is_ok());
    }

    #[test]
    fn test_sip_ceiling() {
        let params = SipParams {
            monthly_sip: 10_000_001.0,
            ..SipParams::default()
        };
        let err = params.validate(&InputLimits::default()).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidInput { field: "sip", .. }));
        assert!(err.to_string().contains("cannot exceed"));
    }

    #[test]
    fn test_goal_needs_tenure() {
        let params = GoalParams {
            years: 0,
            ..GoalParams::default()
        };
        assert!(matches!(
            params.validate(&InputLimits::default()),
            Err(ProjectionError::InvalidInput { field: "yrs", .. })
        ));
    }

    #[test]
    fn test_goal_return_ceiling() {
        let params = GoalParams {
            annual_return: 36.0,
            ..GoalParams::default()
        };
        assert!(params.validate(&InputLimits::default()).is_err());

        let relaxed = InputLimits {
            goal_return_max: 40.0,
            ..InputLimits::default()
        };
        assert!(params.validate(&relaxed).is_ok());
    }

    #[test]
    fn test_long_plans_rejected() {
        let limits = InputLimits::default();

        let swp = WithdrawalParams {
            years: 400_000_000,
            ..WithdrawalParams::default()
        };
        assert!(matches!(
            swp.validate(&limits),
            Err(ProjectionError::InvalidInput { field: "yrs", .. })
        ));
        let swp_at_limit = WithdrawalParams {
            years: 50,
            ..WithdrawalParams::default()
        };
        assert!(swp_at_limit.validate(&limits).is_ok());

        let stp = TransferParams {
            months: 601,
            ..TransferParams::default()
        };
        assert!(matches!(
            stp.validate(&limits),
            Err(ProjectionError::InvalidInput { field: "months", .. })
        ));
        let stp_at_limit = TransferParams {
            months: 600,
            ..TransferParams::default()
        };
        assert!(stp_at_limit.validate(&limits).is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        let params = WithdrawalParams {
            corpus: f64::NAN,
            ..WithdrawalParams::default()
        };
        assert!(params.validate(&InputLimits::default()).is_err());
    }

    #[test]
    fn test_negative_rejected() {
        let params = FreedomParams {
            monthly_expense: -1.0,
            ..FreedomParams::default()
        };
        assert!(params.validate(&InputLimits::default()).is_err());
    }
}
