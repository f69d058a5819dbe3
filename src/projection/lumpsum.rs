//! Lumpsum growth and inflation-adjusted (real) returns

use serde::{Deserialize, Serialize};

use super::rounding::{round_currency, round_to};
use crate::params::{InflationParams, LumpsumParams};

/// Lumpsum amount and its compounded future value, whole units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LumpsumProjection {
    #[serde(rename = "P0")]
    pub principal: f64,
    #[serde(rename = "FV")]
    pub future_value: f64,
}

/// Nominal vs real outcome of a lumpsum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationAdjusted {
    /// Real annual return (%), 2 decimals
    pub real_return_percent: f64,
    /// Future value in nominal terms
    #[serde(rename = "nominalFV")]
    pub nominal_fv: f64,
    /// Future value in today's money
    #[serde(rename = "realFV")]
    pub real_fv: f64,
}

/// Compound growth factor (1 + rate/100)^years
fn growth_factor(annual_rate: f64, years: u32) -> f64 {
    (1.0 + annual_rate / 100.0).powf(years as f64)
}

/// FV = P0 * (1 + R/100)^T
pub fn project_lumpsum(params: &LumpsumParams) -> LumpsumProjection {
    let future_value = params.principal * growth_factor(params.annual_return, params.years);
    LumpsumProjection {
        principal: round_currency(params.principal),
        future_value: round_currency(future_value),
    }
}

/// Exact Fisher relation: (1 + R) / (1 + I) - 1, as a fraction
pub fn real_rate(nominal_return: f64, inflation: f64) -> f64 {
    (1.0 + nominal_return / 100.0) / (1.0 + inflation / 100.0) - 1.0
}

/// Deflate a lumpsum's nominal growth by inflation
pub fn adjust_for_inflation(params: &InflationParams) -> InflationAdjusted {
    let real = real_rate(params.nominal_return, params.inflation);
    let nominal_fv = params.principal * growth_factor(params.nominal_return, params.years);
    let real_fv = nominal_fv / growth_factor(params.inflation, params.years);

    InflationAdjusted {
        real_return_percent: round_to(real * 100.0, 2),
        nominal_fv: round_currency(nominal_fv),
        real_fv: round_currency(real_fv),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_lumpsum() {
        let result = project_lumpsum(&LumpsumParams::default());
        assert_eq!(result.principal, 500_000.0);
        // 500,000 * 1.12^10 = 1,552,924.11
        assert_eq!(result.future_value, 1_552_924.0);
    }

    #[test]
    fn test_lumpsum_increases_with_rate() {
        let mut last = f64::MIN;
        for rate in [-50.0, -5.0, 0.0, 4.0, 8.0, 15.0, 30.0] {
            let fv = project_lumpsum(&LumpsumParams {
                annual_return: rate,
                ..LumpsumParams::default()
            })
            .future_value;
            assert!(fv > last, "fv {} at {}% not above {}", fv, rate, last);
            last = fv;
        }
    }

    #[test]
    fn test_fisher_relation() {
        let exact = real_rate(12.0, 6.0);
        assert_abs_diff_eq!(exact, 1.12 / 1.06 - 1.0, epsilon = 1e-15);

        // The linear approximation overstates by (R - I) * I / (1 + I)
        let naive = (12.0 - 6.0) / 100.0;
        assert_abs_diff_eq!(naive - exact, 0.06 * 0.06 / 1.06, epsilon = 1e-12);
    }

    #[test]
    fn test_default_inflation() {
        let result = adjust_for_inflation(&InflationParams::default());
        assert_eq!(result.real_return_percent, 5.66);
        // 1,000,000 * 1.12^10
        assert_eq!(result.nominal_fv, 3_105_848.0);
        assert!(result.real_fv < result.nominal_fv);
        // Deflating by 1.06^10 leaves roughly 1.734M in today's money
        assert!((result.real_fv - 1_734_289.0).abs() < 2.0, "real fv {}", result.real_fv);
    }

    #[test]
    fn test_equal_rates_preserve_value() {
        let result = adjust_for_inflation(&InflationParams {
            nominal_return: 7.0,
            inflation: 7.0,
            years: 12,
            principal: 250_000.0,
        });
        assert_eq!(result.real_return_percent, 0.0);
        assert_eq!(result.real_fv, 250_000.0);
    }
}
