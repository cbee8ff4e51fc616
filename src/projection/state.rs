//! Transient state tracked during month-by-month simulation
//!
//! Each calculation constructs fresh state and discards it after producing
//! its result sequence; nothing here outlives a single engine call.

/// Outstanding-loan state during amortization simulation
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Outstanding balance
    pub balance: f64,

    /// Cumulative interest accrued to date
    pub interest_paid: f64,

    /// Months simulated so far
    pub months_elapsed: u32,
}

impl AmortizationState {
    /// Initialize from an opening principal
    pub fn new(principal: f64) -> Self {
        Self {
            balance: principal,
            interest_paid: 0.0,
            months_elapsed: 0,
        }
    }

    /// Advance one month: accrue interest, then apply a payment.
    ///
    /// The payment is capped at balance + interest so the final installment
    /// cannot overshoot. Interest is covered first; the remainder reduces
    /// principal. Returns the payment actually applied.
    pub fn step(&mut self, scheduled_payment: f64, monthly_rate: f64) -> f64 {
        let interest = self.balance * monthly_rate;
        self.interest_paid += interest;

        let payment = scheduled_payment.min(self.balance + interest);
        self.balance = (self.balance + interest - payment).max(0.0);
        self.months_elapsed += 1;

        payment
    }

    /// Whether the loan has been fully repaid
    pub fn is_cleared(&self) -> bool {
        self.balance <= 0.0
    }
}

/// Investment-accumulation state during simulation
///
/// Contributions join the running balance immediately; interest is credited
/// once per completed 12-month block at the full annual rate on the balance
/// that already includes the year's contributions (statutory PPF-style
/// accounting).
#[derive(Debug, Clone)]
pub struct InvestmentState {
    /// Accumulated value including credited interest
    pub value: f64,

    /// Total contributions deposited to date
    pub contributed: f64,

    /// Contributions deposited since the last year boundary
    pub contributed_this_year: f64,
}

impl InvestmentState {
    pub fn new() -> Self {
        Self {
            value: 0.0,
            contributed: 0.0,
            contributed_this_year: 0.0,
        }
    }

    /// Deposit a contribution into the running balance
    pub fn deposit(&mut self, amount: f64) {
        self.value += amount;
        self.contributed += amount;
        self.contributed_this_year += amount;
    }

    /// Credit one full year of interest on the running balance.
    /// Returns the amount credited.
    pub fn credit_annual(&mut self, annual_rate: f64) -> f64 {
        let credited = self.value * annual_rate;
        self.value += credited;
        credited
    }

    /// Reset per-year accumulators after a year boundary
    pub fn begin_year(&mut self) {
        self.contributed_this_year = 0.0;
    }
}

impl Default for InvestmentState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amortization_step_reduces_balance() {
        let mut state = AmortizationState::new(100_000.0);
        let rate = 0.12 / 12.0; // 12% annual

        let paid = state.step(2_000.0, rate);
        assert!((paid - 2_000.0).abs() < 1e-9);
        // 1000 interest, 1000 principal
        assert!((state.balance - 99_000.0).abs() < 1e-9);
        assert!((state.interest_paid - 1_000.0).abs() < 1e-9);
        assert_eq!(state.months_elapsed, 1);
    }

    #[test]
    fn test_final_payment_is_capped() {
        let mut state = AmortizationState::new(500.0);
        let paid = state.step(10_000.0, 0.01);

        // Payment covers exactly balance + interest
        assert!((paid - 505.0).abs() < 1e-9);
        assert_eq!(state.balance, 0.0);
        assert!(state.is_cleared());
    }

    #[test]
    fn test_underpayment_grows_balance() {
        // Payment below accrued interest capitalizes the shortfall
        let mut state = AmortizationState::new(1_000_000.0);
        let rate = 0.20 / 12.0;
        state.step(1_000.0, rate);

        assert!(state.balance > 1_000_000.0);
        assert!(!state.is_cleared());
    }

    #[test]
    fn test_investment_deposit_and_credit() {
        let mut invest = InvestmentState::new();
        for _ in 0..12 {
            invest.deposit(1_000.0);
        }
        assert!((invest.value - 12_000.0).abs() < 1e-9);
        assert!((invest.contributed_this_year - 12_000.0).abs() < 1e-9);

        let credited = invest.credit_annual(0.05);
        assert!((credited - 600.0).abs() < 1e-9);
        assert!((invest.value - 12_600.0).abs() < 1e-9);

        invest.begin_year();
        assert_eq!(invest.contributed_this_year, 0.0);
        assert!((invest.contributed - 12_000.0).abs() < 1e-9);
    }
}
