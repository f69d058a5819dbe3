//! Goal-based SIP planner: the monthly contribution needed to reach a target

use log::debug;
use serde::{Deserialize, Serialize};

use super::annuity::annuity_due_factor;
use super::rounding::{round_cents, round_currency};
use super::state::months_in_years;
use crate::params::GoalParams;

/// Required monthly SIP for a goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalPlan {
    /// Monthly contribution, kept to cents
    pub monthly: f64,
    /// Total contributed over the tenure (whole units)
    pub invested: f64,
    /// Target future value, echoed back
    pub goal: f64,
}

/// Solve for the monthly contribution whose annuity-due accumulation over
/// `12 * years` months reaches `goal`.
///
/// `years` must be positive: a zero tenure divides by zero and yields a
/// non-finite contribution.
pub fn solve_goal(params: &GoalParams) -> GoalPlan {
    let monthly_rate = params.annual_return / 100.0 / 12.0;
    let periods = months_in_years(params.years);

    let monthly = if monthly_rate == 0.0 {
        params.goal / periods as f64
    } else {
        params.goal / annuity_due_factor(monthly_rate, periods)
    };

    let monthly = round_cents(monthly);
    let invested = round_currency(monthly * periods as f64);

    debug!(
        "goal {} over {} months at {}%: monthly={}",
        params.goal, periods, params.annual_return, monthly
    );

    GoalPlan {
        monthly,
        invested,
        goal: params.goal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::annuity::annuity_due_fv;

    #[test]
    fn test_default_goal() {
        let plan = solve_goal(&GoalParams::default());

        assert_eq!(plan.goal, 100_000.0);
        assert!(plan.monthly > 190.0 && plan.monthly < 205.0, "monthly {}", plan.monthly);
        assert_eq!(plan.invested, round_currency(plan.monthly * 180.0));
    }

    #[test]
    fn test_monthly_keeps_cents() {
        let plan = solve_goal(&GoalParams::default());
        let cents = plan.monthly * 100.0;
        assert!((cents - cents.round()).abs() < 1e-6);
    }

    #[test]
    fn test_accumulation_reaches_goal() {
        let params = GoalParams {
            goal: 5_000_000.0,
            annual_return: 12.0,
            years: 20,
        };
        let plan = solve_goal(&params);
        let reached = annuity_due_fv(plan.monthly, 0.01, 240);

        // Only the cents rounding of the contribution separates the two
        assert!((reached - params.goal).abs() < 0.005 * 1_000.0, "reached {}", reached);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        let params = GoalParams {
            goal: 120_000.0,
            annual_return: 0.0,
            years: 10,
        };
        let plan = solve_goal(&params);
        assert_eq!(plan.monthly, 1_000.0);
        assert_eq!(plan.invested, 120_000.0);
    }

    #[test]
    fn test_zero_tenure_is_not_finite() {
        let params = GoalParams {
            years: 0,
            ..GoalParams::default()
        };
        assert!(!solve_goal(&params).monthly.is_finite());
    }
}
