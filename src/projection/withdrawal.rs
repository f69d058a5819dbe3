//! Systematic withdrawal plan (SWP) with depletion detection

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::cashflows::{WithdrawalSnapshot, WithdrawalTotals};
use super::state::{months_in_years, snapshot_capacity, PoolState};
use crate::params::WithdrawalParams;

/// Result of a withdrawal simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalProjection {
    /// Position when the simulation ended
    #[serde(rename = "final")]
    pub final_totals: WithdrawalTotals,
    /// One entry per completed year, plus the month the plan ended on
    pub series: Vec<WithdrawalSnapshot>,
    /// Month the corpus ran out, if it did
    pub depleted_at: Option<u32>,
}

impl WithdrawalProjection {
    /// Whether the corpus lasted the full tenure
    pub fn sustained(&self) -> bool {
        self.depleted_at.is_none()
    }
}

/// Simulate monthly withdrawals from a compounding corpus.
///
/// Each month interest is credited first, then min(withdrawal, balance) is
/// taken. Once the balance reaches zero the month is recorded as the
/// depletion month and no further months are simulated.
pub fn simulate_withdrawal(params: &WithdrawalParams) -> WithdrawalProjection {
    let monthly_rate = params.annual_return / 100.0 / 12.0;
    let total_months = months_in_years(params.years);

    let mut state = PoolState::with_balance(params.corpus);
    let mut series = Vec::with_capacity(snapshot_capacity(params.years));
    let mut depleted_at = None;

    for _ in 1..=total_months {
        state.advance_month();
        state.accrue(monthly_rate);
        state.withdraw(params.withdrawal);

        if state.is_depleted() {
            state.balance = 0.0;
            depleted_at = Some(state.month);
            debug!("swp corpus depleted at month {}", state.month);
        }

        if state.is_year_end() || state.month == total_months || depleted_at.is_some() {
            let snapshot = WithdrawalSnapshot::capture(&state);
            trace!("swp month {}: balance={}", snapshot.month, snapshot.balance);
            series.push(snapshot);
        }

        if depleted_at.is_some() {
            break;
        }
    }

    WithdrawalProjection {
        final_totals: WithdrawalTotals::from(&state),
        series,
        depleted_at,
    }
}
