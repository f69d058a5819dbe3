//! SIP growth projection (flat and annual step-up)

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::cashflows::{GrowthSnapshot, GrowthTotals};
use super::rounding::round_currency;
use super::state::{months_in_years, snapshot_capacity, year_of_month, PoolState};
use crate::params::SipParams;

/// Flat and step-up projections of the same SIP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipProjection {
    /// Final position with a constant contribution
    pub flat: GrowthTotals,
    /// Final position with the contribution stepped up every year
    pub stepup: GrowthTotals,
    pub flat_series: Vec<GrowthSnapshot>,
    pub step_series: Vec<GrowthSnapshot>,
}

/// Future value of a monthly contribution `amount` made at the start of each of
/// `periods` months at `monthly_rate`
pub fn annuity_due_fv(amount: f64, monthly_rate: f64, periods: u32) -> f64 {
    if monthly_rate == 0.0 {
        return amount * periods as f64;
    }
    amount * annuity_due_factor(monthly_rate, periods)
}

/// ((1+i)^n - 1) / i * (1+i); callers handle i = 0
pub(crate) fn annuity_due_factor(monthly_rate: f64, periods: u32) -> f64 {
    ((1.0 + monthly_rate).powf(periods as f64) - 1.0) / monthly_rate * (1.0 + monthly_rate)
}

/// Contribution for a 1-indexed month under an annual step-up
///
/// A pure function of the month: year k = ceil(month / 12) pays
/// round(sip * (1 + step/100)^(k-1)).
pub fn stepped_contribution(monthly_sip: f64, step_up: f64, month: u32) -> f64 {
    let year = year_of_month(month);
    round_currency(monthly_sip * (1.0 + step_up / 100.0).powf((year - 1) as f64))
}

/// Run a monthly accumulation over `total_months`, snapshotting each year end
fn simulate<F>(total_months: u32, monthly_rate: f64, contribution: F) -> Vec<GrowthSnapshot>
where
    F: Fn(u32) -> f64,
{
    let mut state = PoolState::empty();
    let mut series = Vec::with_capacity(snapshot_capacity(total_months / 12));

    for _ in 1..=total_months {
        state.advance_month();
        let amount = contribution(state.month);
        // Existing balance grows first, then the month's deposit lands
        state.accrue(monthly_rate);
        state.deposit(amount);

        if state.is_year_end() {
            let snapshot = GrowthSnapshot::capture(&state);
            trace!("sip year {}: invested={} fv={}", snapshot.year, snapshot.invested, snapshot.fv);
            series.push(snapshot);
        }
    }

    series
}

/// Project a SIP with and without the annual step-up
pub fn project_sip(params: &SipParams) -> SipProjection {
    let monthly_rate = params.annual_return / 100.0 / 12.0;
    let total_months = months_in_years(params.years);

    let flat_series = simulate(total_months, monthly_rate, |_| params.monthly_sip);
    let step_series = simulate(total_months, monthly_rate, |month| {
        stepped_contribution(params.monthly_sip, params.step_up, month)
    });

    let flat = GrowthTotals::from_series(&flat_series);
    let stepup = GrowthTotals::from_series(&step_series);

    debug!(
        "sip projection: {} months, flat fv={}, step-up fv={}",
        total_months, flat.fv, stepup.fv
    );

    SipProjection {
        flat,
        stepup,
        flat_series,
        step_series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_sip() {
        let result = project_sip(&SipParams::default());

        assert_eq!(result.flat_series.len(), 10);
        assert_eq!(result.step_series.len(), 10);
        assert_eq!(result.flat.invested, 1_200_000.0);

        // Deposits land after the month's growth, one period short of annuity-due
        let closed = annuity_due_fv(10_000.0, 0.01, 120) / 1.01;
        assert!((result.flat.fv - closed).abs() <= 1.0, "fv {} vs {}", result.flat.fv, closed);
    }

    #[test]
    fn test_step_up_exceeds_flat() {
        let result = project_sip(&SipParams::default());
        assert!(result.stepup.invested > result.flat.invested);
        assert!(result.stepup.fv > result.flat.fv);

        // Year 2 pays 11,000 a month, so two years invest 120,000 + 132,000
        assert_eq!(result.step_series[1].invested, 252_000.0);
    }

    #[test]
    fn test_stepped_contribution_by_month() {
        assert_eq!(stepped_contribution(10_000.0, 10.0, 1), 10_000.0);
        assert_eq!(stepped_contribution(10_000.0, 10.0, 12), 10_000.0);
        assert_eq!(stepped_contribution(10_000.0, 10.0, 13), 11_000.0);
        assert_eq!(stepped_contribution(10_000.0, 10.0, 25), 12_100.0);
        assert_eq!(stepped_contribution(10_000.0, 10.0, 37), 13_310.0);
    }

    #[test]
    fn test_zero_rate_is_plain_summation() {
        let params = SipParams {
            monthly_sip: 2_500.0,
            annual_return: 0.0,
            years: 7,
            step_up: 0.0,
        };
        let result = project_sip(&params);
        assert_eq!(result.flat.fv, 2_500.0 * 84.0);
        assert_eq!(result.flat.fv, result.flat.invested);
        assert_eq!(result.stepup, result.flat);
    }

    #[test]
    fn test_zero_years_is_empty() {
        let params = SipParams {
            years: 0,
            ..SipParams::default()
        };
        let result = project_sip(&params);
        assert!(result.flat_series.is_empty());
        assert!(result.step_series.is_empty());
        assert_eq!(result.flat, GrowthTotals::default());
        assert_eq!(result.stepup, GrowthTotals::default());
    }

    #[test]
    fn test_snapshot_years_are_one_based() {
        let result = project_sip(&SipParams::default());
        let years: Vec<u32> = result.flat_series.iter().map(|s| s.year).collect();
        assert_eq!(years, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_annuity_due_zero_rate() {
        assert_relative_eq!(annuity_due_fv(100.0, 0.0, 12), 1200.0);
    }
}
