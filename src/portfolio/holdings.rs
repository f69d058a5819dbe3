//! Holdings totals, net worth and current allocation from the client's
//! financial-data document

use serde::{Deserialize, Serialize};

use super::allocation::Allocation;
use crate::projection::rounding::round_to;

/// Mutual fund, stock or other holding valued at market
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketHolding {
    pub name: Option<String>,
    pub current_value: Option<f64>,
}

/// Debt or fixed-income holding valued at cost
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebtHolding {
    pub name: Option<String>,
    pub amount_invested: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsurancePolicy {
    pub name: Option<String>,
    pub sum_assured: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Liability {
    pub name: Option<String>,
    pub outstanding_balance: Option<f64>,
}

/// Financial data as stored by the client API; every list may be missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialData {
    pub equity_mutual_funds: Vec<MarketHolding>,
    pub equity_stocks: Vec<MarketHolding>,
    pub debt_and_fixed_income: Vec<DebtHolding>,
    pub insurance_policies: Vec<InsurancePolicy>,
    pub liabilities: Vec<Liability>,
    #[serde(rename = "otherinvestment")]
    pub other_investments: Vec<MarketHolding>,
}

/// Totals by asset class and the resulting net worth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_equity: f64,
    pub total_debt: f64,
    pub total_insurance: f64,
    pub total_liabilities: f64,
    pub total_other: f64,
    pub total_assets: f64,
    pub net_worth: f64,
    /// Split of equity, debt and other holdings (insurance excluded), in %
    /// to 1 decimal; None when nothing is invested
    pub current_allocation: Option<Allocation>,
}

fn sum_values<T>(items: &[T], value: impl Fn(&T) -> Option<f64>) -> f64 {
    items.iter().map(|i| value(i).unwrap_or(0.0)).sum()
}

impl FinancialData {
    pub fn summary(&self) -> PortfolioSummary {
        let total_equity = sum_values(&self.equity_mutual_funds, |h| h.current_value)
            + sum_values(&self.equity_stocks, |h| h.current_value);
        let total_debt = sum_values(&self.debt_and_fixed_income, |h| h.amount_invested);
        let total_insurance = sum_values(&self.insurance_policies, |p| p.sum_assured);
        let total_liabilities = sum_values(&self.liabilities, |l| l.outstanding_balance);
        let total_other = sum_values(&self.other_investments, |h| h.current_value);

        let total_assets = total_equity + total_debt + total_insurance + total_other;
        let invested = total_equity + total_debt + total_other;

        let current_allocation = (invested > 0.0).then(|| Allocation {
            equity: round_to(total_equity / invested * 100.0, 1),
            debt: round_to(total_debt / invested * 100.0, 1),
            other: round_to(total_other / invested * 100.0, 1),
        });

        PortfolioSummary {
            total_equity,
            total_debt,
            total_insurance,
            total_liabilities,
            total_other,
            total_assets,
            net_worth: total_assets - total_liabilities,
            current_allocation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FinancialData {
        serde_json::from_str(
            r#"{
                "equityMutualFunds": [{"name": "Flexi Cap", "currentValue": 400000}, {"name": "Index", "currentValue": 200000}],
                "equityStocks": [{"currentValue": 150000}, {}],
                "debtAndFixedIncome": [{"amountInvested": 200000}],
                "insurancePolicies": [{"sumAssured": 5000000}],
                "liabilities": [{"outstandingBalance": 1200000}],
                "otherinvestment": [{"currentValue": 50000}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_totals_and_net_worth() {
        let summary = sample().summary();
        assert_eq!(summary.total_equity, 750_000.0);
        assert_eq!(summary.total_debt, 200_000.0);
        assert_eq!(summary.total_insurance, 5_000_000.0);
        assert_eq!(summary.total_other, 50_000.0);
        assert_eq!(summary.total_assets, 6_000_000.0);
        assert_eq!(summary.net_worth, 4_800_000.0);
    }

    #[test]
    fn test_current_allocation_excludes_insurance() {
        let allocation = sample().summary().current_allocation.unwrap();
        assert_eq!(allocation.equity, 75.0);
        assert_eq!(allocation.debt, 20.0);
        assert_eq!(allocation.other, 5.0);
    }

    #[test]
    fn test_empty_document() {
        let data: FinancialData = serde_json::from_str("{}").unwrap();
        let summary = data.summary();
        assert_eq!(summary.total_assets, 0.0);
        assert_eq!(summary.net_worth, 0.0);
        assert!(summary.current_allocation.is_none());
    }
}
