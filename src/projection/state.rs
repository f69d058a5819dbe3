//! Monthly state tracking for a single compounding pool

/// State of a pool at a point in time during a monthly simulation
#[derive(Debug, Clone, Default)]
pub struct PoolState {
    /// Current projection month (1-indexed, 0 before the first advance)
    pub month: u32,

    /// Current balance
    pub balance: f64,

    /// Cumulative contributions made into the pool
    pub invested: f64,

    /// Cumulative amounts taken out of the pool
    pub withdrawn: f64,

    /// Cumulative interest credited
    pub interest: f64,
}

impl PoolState {
    /// Start an empty pool (accumulation plans)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start a pool holding an opening balance (withdrawal and transfer plans)
    pub fn with_balance(opening_balance: f64) -> Self {
        Self {
            balance: opening_balance,
            ..Self::default()
        }
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.month += 1;
    }

    /// Plan year of the current month (1-indexed, ceil(month / 12))
    pub fn year(&self) -> u32 {
        year_of_month(self.month)
    }

    /// Whether the current month closes a plan year
    pub fn is_year_end(&self) -> bool {
        self.month > 0 && self.month % 12 == 0
    }

    /// Compound the balance by one month; returns the interest credited
    pub fn accrue(&mut self, monthly_rate: f64) -> f64 {
        let grown = self.balance * (1.0 + monthly_rate);
        let credited = grown - self.balance;
        self.balance = grown;
        self.interest += credited;
        credited
    }

    /// Add a contribution to the balance
    pub fn deposit(&mut self, amount: f64) {
        self.invested += amount;
        self.balance += amount;
    }

    /// Take up to `amount` out of the balance, never more than what remains.
    /// Returns the amount actually taken.
    pub fn withdraw(&mut self, amount: f64) -> f64 {
        let taken = amount.min(self.balance.max(0.0));
        self.balance -= taken;
        self.withdrawn += taken;
        taken
    }

    /// Whether the balance has run out
    pub fn is_depleted(&self) -> bool {
        self.balance <= 0.0
    }
}

/// Plan year (1-indexed) that a 1-indexed month falls into
pub fn year_of_month(month: u32) -> u32 {
    month.div_ceil(12)
}

/// Longest tenure a snapshot series is pre-sized for
const MAX_PRESIZED_YEARS: u32 = 100;

/// Months in a tenure of whole years, saturating at `u32::MAX`
pub fn months_in_years(years: u32) -> u32 {
    years.saturating_mul(12)
}

/// Capacity hint for a series with one snapshot per year plus a terminal one
pub(crate) fn snapshot_capacity(years: u32) -> usize {
    years.min(MAX_PRESIZED_YEARS) as usize + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_mapping() {
        assert_eq!(year_of_month(1), 1);
        assert_eq!(year_of_month(12), 1);
        assert_eq!(year_of_month(13), 2);
        assert_eq!(year_of_month(240), 20);
    }

    #[test]
    fn test_tenure_conversion_saturates() {
        assert_eq!(months_in_years(50), 600);
        assert_eq!(months_in_years(400_000_000), u32::MAX);
        assert_eq!(snapshot_capacity(20), 21);
        assert_eq!(snapshot_capacity(400_000_000), 101);
    }

    #[test]
    fn test_accrue_then_deposit() {
        let mut state = PoolState::empty();
        state.advance_month();
        state.accrue(0.01);
        state.deposit(1000.0);
        state.advance_month();
        let credited = state.accrue(0.01);

        assert!((credited - 10.0).abs() < 1e-9);
        assert!((state.balance - 1010.0).abs() < 1e-9);
        assert_eq!(state.invested, 1000.0);
        assert_eq!(state.month, 2);
    }

    #[test]
    fn test_withdraw_is_capped() {
        let mut state = PoolState::with_balance(500.0);
        assert_eq!(state.withdraw(300.0), 300.0);
        assert_eq!(state.withdraw(300.0), 200.0);
        assert_eq!(state.balance, 0.0);
        assert_eq!(state.withdrawn, 500.0);
        assert!(state.is_depleted());
    }

    #[test]
    fn test_year_end() {
        let mut state = PoolState::empty();
        assert!(!state.is_year_end());
        for _ in 0..12 {
            state.advance_month();
        }
        assert!(state.is_year_end());
        assert_eq!(state.year(), 1);
    }
}
