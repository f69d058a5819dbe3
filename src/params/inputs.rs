//! Calculator parameter records
//!
//! Every field is optional on the wire: missing fields take the defaults the
//! calculator pages open with. Rates are annual percentages (12 means 12%).

use serde::{Deserialize, Serialize};

/// Monthly SIP with an optional annual step-up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SipParams {
    /// Monthly contribution
    #[serde(rename = "sip")]
    pub monthly_sip: f64,
    /// Expected annual return (%)
    #[serde(rename = "ret")]
    pub annual_return: f64,
    /// Tenure in years
    #[serde(rename = "yrs")]
    pub years: u32,
    /// Annual step-up of the contribution (%)
    #[serde(rename = "step")]
    pub step_up: f64,
}

impl Default for SipParams {
    fn default() -> Self {
        Self {
            monthly_sip: 10_000.0,
            annual_return: 12.0,
            years: 10,
            step_up: 10.0,
        }
    }
}

/// Target corpus for the goal-based SIP planner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalParams {
    pub goal: f64,
    #[serde(rename = "ret")]
    pub annual_return: f64,
    #[serde(rename = "yrs")]
    pub years: u32,
}

impl Default for GoalParams {
    fn default() -> Self {
        Self {
            goal: 100_000.0,
            annual_return: 12.0,
            years: 15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LumpsumParams {
    #[serde(rename = "P0")]
    pub principal: f64,
    #[serde(rename = "R")]
    pub annual_return: f64,
    #[serde(rename = "T")]
    pub years: u32,
}

impl Default for LumpsumParams {
    fn default() -> Self {
        Self {
            principal: 500_000.0,
            annual_return: 12.0,
            years: 10,
        }
    }
}

/// Nominal return, inflation and a lumpsum to deflate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InflationParams {
    #[serde(rename = "R")]
    pub nominal_return: f64,
    #[serde(rename = "I")]
    pub inflation: f64,
    #[serde(rename = "T")]
    pub years: u32,
    #[serde(rename = "P0")]
    pub principal: f64,
}

impl Default for InflationParams {
    fn default() -> Self {
        Self {
            nominal_return: 12.0,
            inflation: 6.0,
            years: 10,
            principal: 1_000_000.0,
        }
    }
}

/// Systematic transfer from a debt pool into an equity pool
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferParams {
    /// Opening balance of the source (debt) pool
    pub source: f64,
    /// Monthly transfer amount
    pub transfer: f64,
    /// Number of monthly transfers
    pub months: u32,
    /// Source pool return (% p.a.)
    #[serde(rename = "rd")]
    pub debt_return: f64,
    /// Destination pool return (% p.a.)
    #[serde(rename = "re")]
    pub equity_return: f64,
}

impl Default for TransferParams {
    fn default() -> Self {
        Self {
            source: 1_000_000.0,
            transfer: 50_000.0,
            months: 12,
            debt_return: 6.0,
            equity_return: 12.0,
        }
    }
}

/// Systematic withdrawal from a compounding corpus
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WithdrawalParams {
    pub corpus: f64,
    /// Monthly withdrawal
    pub withdrawal: f64,
    #[serde(rename = "ret")]
    pub annual_return: f64,
    #[serde(rename = "yrs")]
    pub years: u32,
}

impl Default for WithdrawalParams {
    fn default() -> Self {
        Self {
            corpus: 10_000_000.0,
            withdrawal: 30_000.0,
            annual_return: 10.0,
            years: 20,
        }
    }
}

/// Inputs of the financial freedom index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreedomParams {
    #[serde(rename = "expense")]
    pub monthly_expense: f64,
    #[serde(rename = "passive")]
    pub monthly_passive_income: f64,
    /// Existing investable corpus
    pub corpus: f64,
    #[serde(rename = "ret")]
    pub annual_return: f64,
    #[serde(rename = "infl")]
    pub inflation: f64,
}

impl Default for FreedomParams {
    fn default() -> Self {
        Self {
            monthly_expense: 150_000.0,
            monthly_passive_income: 60_000.0,
            corpus: 25_000_000.0,
            annual_return: 10.0,
            inflation: 6.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let params: SipParams = serde_json::from_str(r#"{"sip": 5000}"#).unwrap();
        assert_eq!(params.monthly_sip, 5000.0);
        assert_eq!(params.annual_return, 12.0);
        assert_eq!(params.years, 10);
        assert_eq!(params.step_up, 10.0);
    }

    #[test]
    fn test_short_field_names() {
        let params: InflationParams =
            serde_json::from_str(r#"{"R": 10, "I": 4, "T": 5, "P0": 200000}"#).unwrap();
        assert_eq!(params.nominal_return, 10.0);
        assert_eq!(params.inflation, 4.0);
        assert_eq!(params.years, 5);
        assert_eq!(params.principal, 200_000.0);

        let json = serde_json::to_value(TransferParams::default()).unwrap();
        assert_eq!(json["rd"], 6.0);
        assert_eq!(json["re"], 12.0);
    }

    #[test]
    fn test_empty_object_is_default() {
        let params: FreedomParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, FreedomParams::default());
    }
}
