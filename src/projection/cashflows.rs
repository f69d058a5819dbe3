//! Snapshot records produced by the monthly simulations

use serde::{Deserialize, Serialize};

use super::rounding::round_currency;
use super::state::PoolState;

/// Year-end position of an accumulation plan
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GrowthSnapshot {
    /// Plan year (1-indexed)
    pub year: u32,
    /// Contributions made to date
    pub invested: f64,
    /// Projected value at year end
    pub fv: f64,
}

impl GrowthSnapshot {
    /// Capture a rounded snapshot from the running pool
    pub fn capture(state: &PoolState) -> Self {
        Self {
            year: state.year(),
            invested: round_currency(state.invested),
            fv: round_currency(state.balance),
        }
    }
}

/// Position of a withdrawal plan at a year end, or at the month it stopped
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalSnapshot {
    /// Plan year (1-indexed, ceil(month / 12))
    pub year: u32,
    /// Month the snapshot was taken at
    pub month: u32,
    pub balance: f64,
    pub total_withdrawn: f64,
    pub total_interest: f64,
}

impl WithdrawalSnapshot {
    pub fn capture(state: &PoolState) -> Self {
        Self {
            year: state.year(),
            month: state.month,
            balance: round_currency(state.balance),
            total_withdrawn: round_currency(state.withdrawn),
            total_interest: round_currency(state.interest),
        }
    }
}

/// Terminal position of a withdrawal plan
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalTotals {
    pub balance: f64,
    pub total_withdrawn: f64,
    pub total_interest: f64,
}

impl From<&PoolState> for WithdrawalTotals {
    fn from(state: &PoolState) -> Self {
        Self {
            balance: round_currency(state.balance),
            total_withdrawn: round_currency(state.withdrawn),
            total_interest: round_currency(state.interest),
        }
    }
}

/// Totals of an accumulation plan (the last snapshot, without the year)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GrowthTotals {
    pub invested: f64,
    pub fv: f64,
}

impl GrowthTotals {
    /// Totals taken from the last snapshot of a series; zero for an empty series
    pub fn from_series(series: &[GrowthSnapshot]) -> Self {
        series
            .last()
            .map(|s| Self {
                invested: s.invested,
                fv: s.fv,
            })
            .unwrap_or_default()
    }

    /// Projected gain over contributions
    pub fn gain(&self) -> f64 {
        self.fv - self.invested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_rounds_at_snapshot() {
        let state = PoolState {
            month: 24,
            balance: 25_000.4,
            invested: 24_000.0,
            withdrawn: 0.0,
            interest: 1_000.6,
        };
        let snap = GrowthSnapshot::capture(&state);
        assert_eq!(snap.year, 2);
        assert_eq!(snap.fv, 25_000.0);

        let wd = WithdrawalSnapshot::capture(&state);
        assert_eq!(wd.total_interest, 1_001.0);
        assert_eq!(wd.month, 24);
    }

    #[test]
    fn test_totals_from_empty_series() {
        let totals = GrowthTotals::from_series(&[]);
        assert_eq!(totals, GrowthTotals::default());
        assert_eq!(totals.gain(), 0.0);
    }
}
