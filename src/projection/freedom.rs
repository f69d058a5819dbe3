//! Financial Freedom Index and the horizon search for financial independence

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::rounding::round_to;
use super::DEFAULT_FREEDOM_HORIZON_YEARS;
use crate::params::FreedomParams;

/// FFI is capped at 200%
pub const FFI_CAP: f64 = 2.0;

/// Where the household stands on the path to financial independence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreedomStatus {
    /// Passive income already covers expenses
    #[serde(rename = "Already financially independent")]
    AlreadyIndependent,
    /// The corpus yield catches up with the inflating gap within the horizon
    #[serde(rename = "On course")]
    OnCourse,
    /// No year within the horizon closes the gap
    #[serde(rename = "Gap persists")]
    GapPersists,
}

impl FreedomStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FreedomStatus::AlreadyIndependent => "Already financially independent",
            FreedomStatus::OnCourse => "On course",
            FreedomStatus::GapPersists => "Gap persists",
        }
    }
}

impl fmt::Display for FreedomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreedomIndex {
    /// Passive income over expenses, capped at 2
    pub ffi: f64,
    /// FFI as a percentage, 1 decimal
    pub ffi_percent: f64,
    pub status: FreedomStatus,
    /// Years until the corpus yield covers the gap; None when it never does
    pub years: Option<u32>,
}

/// Compute the FFI and search up to the default 60-year horizon
pub fn compute_freedom_index(params: &FreedomParams) -> FreedomIndex {
    compute_freedom_index_within(params, DEFAULT_FREEDOM_HORIZON_YEARS)
}

/// Compute the FFI, searching years `0..horizon_years` for the first year in
/// which the corpus yield covers the inflated expense gap.
pub fn compute_freedom_index_within(params: &FreedomParams, horizon_years: u32) -> FreedomIndex {
    let annual_expense = params.monthly_expense * 12.0;
    let annual_passive = params.monthly_passive_income * 12.0;
    let annual_return = params.annual_return / 100.0;
    let inflation = params.inflation / 100.0;

    let ffi = if annual_expense == 0.0 {
        1.0
    } else {
        (annual_passive / annual_expense).min(FFI_CAP)
    };
    let result = |status, years| FreedomIndex {
        ffi,
        ffi_percent: round_to(ffi * 100.0, 1),
        status,
        years,
    };

    if annual_passive >= annual_expense {
        return result(FreedomStatus::AlreadyIndependent, Some(0));
    }

    let mut corpus = params.corpus;
    for year in 0..horizon_years {
        let gap = annual_expense * (1.0 + inflation).powf(year as f64) - annual_passive;
        let corpus_yield = corpus * annual_return;
        if corpus_yield >= gap {
            debug!("financial independence reached in year {}", year);
            return result(FreedomStatus::OnCourse, Some(year));
        }
        corpus *= 1.0 + annual_return;
    }

    debug!("expense gap persists after {} years", horizon_years);
    result(FreedomStatus::GapPersists, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_household() {
        let index = compute_freedom_index(&FreedomParams::default());

        // 60,000 of 150,000 covered
        assert!((index.ffi - 0.4).abs() < 1e-12);
        assert_eq!(index.ffi_percent, 40.0);
        assert_eq!(index.status, FreedomStatus::OnCourse);
        // 2.5 crore yields 25 lakh against a 10.8 lakh gap right away
        assert_eq!(index.years, Some(0));
    }

    #[test]
    fn test_already_independent() {
        let index = compute_freedom_index(&FreedomParams {
            monthly_expense: 10_000.0,
            monthly_passive_income: 20_000.0,
            corpus: 0.0,
            annual_return: 3.0,
            inflation: 9.0,
        });
        assert_eq!(index.status, FreedomStatus::AlreadyIndependent);
        assert_eq!(index.years, Some(0));
        assert_eq!(index.ffi, 2.0);
    }

    #[test]
    fn test_ffi_is_capped() {
        let index = compute_freedom_index(&FreedomParams {
            monthly_expense: 10_000.0,
            monthly_passive_income: 90_000.0,
            ..FreedomParams::default()
        });
        assert_eq!(index.ffi, FFI_CAP);
        assert_eq!(index.ffi_percent, 200.0);
    }

    #[test]
    fn test_zero_expense() {
        let index = compute_freedom_index(&FreedomParams {
            monthly_expense: 0.0,
            monthly_passive_income: 0.0,
            ..FreedomParams::default()
        });
        assert_eq!(index.ffi, 1.0);
        assert_eq!(index.status, FreedomStatus::AlreadyIndependent);
    }

    #[test]
    fn test_on_course_after_some_years() {
        let index = compute_freedom_index(&FreedomParams {
            monthly_expense: 100_000.0,
            monthly_passive_income: 0.0,
            corpus: 5_000_000.0,
            annual_return: 12.0,
            inflation: 6.0,
        });
        assert_eq!(index.status, FreedomStatus::OnCourse);
        let years = index.years.unwrap();
        assert!(years > 0 && years < 60);

        // The found year is the first that works
        let gap = |t: u32| 1_200_000.0 * 1.06f64.powf(t as f64);
        let corpus = |t: u32| 5_000_000.0 * 1.12f64.powf(t as f64);
        assert!(corpus(years) * 0.12 >= gap(years) * (1.0 - 1e-9));
        assert!(corpus(years - 1) * 0.12 < gap(years - 1));
    }

    #[test]
    fn test_gap_persists() {
        let index = compute_freedom_index(&FreedomParams {
            monthly_expense: 1_000_000.0,
            monthly_passive_income: 0.0,
            corpus: 0.0,
            annual_return: 1.0,
            inflation: 20.0,
        });
        assert_eq!(index.status, FreedomStatus::GapPersists);
        assert_eq!(index.years, None);
    }

    #[test]
    fn test_custom_horizon() {
        let params = FreedomParams {
            monthly_expense: 100_000.0,
            monthly_passive_income: 0.0,
            corpus: 5_000_000.0,
            annual_return: 12.0,
            inflation: 6.0,
        };
        let years = compute_freedom_index(&params).years.unwrap();

        let short = compute_freedom_index_within(&params, years);
        assert_eq!(short.status, FreedomStatus::GapPersists);

        let exact = compute_freedom_index_within(&params, years + 1);
        assert_eq!(exact.years, Some(years));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(FreedomStatus::GapPersists.to_string(), "Gap persists");
        let json = serde_json::to_string(&FreedomStatus::AlreadyIndependent).unwrap();
        assert_eq!(json, "\"Already financially independent\"");
    }
}
