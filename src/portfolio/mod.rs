//! Client dashboard arithmetic: holdings totals, net worth, and current vs
//! recommended asset allocation

mod allocation;
mod holdings;

pub use allocation::{
    compare_allocation, recommended_allocation, Allocation, AllocationComparison, RiskProfile,
    DEFAULT_AGE,
};
pub use holdings::{
    DebtHolding, FinancialData, InsurancePolicy, Liability, MarketHolding, PortfolioSummary,
};
