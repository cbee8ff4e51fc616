//! Output structures for projection routines
//!
//! Every projection produces an ordered sequence of `YearlySnapshot` rows
//! plus summary scalars; the structures are plain data, suitable for
//! serialization into the saved-calculation store or a JSON API response.

use serde::{Deserialize, Serialize};

/// Phase of a simulation at snapshot time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationPhase {
    /// A loan balance is still being paid down
    LoanRepayment,
    /// All cash flow goes to the investment vehicle
    InvestmentOnly,
}

/// One row of projection output, emitted once per simulated year
/// (or fractional final year)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlySnapshot {
    /// Year index (1-based)
    pub year: u32,

    /// Months elapsed at this snapshot (12, 24, ... or the final month)
    pub months_elapsed: u32,

    /// Phase in effect when the snapshot was taken
    pub phase: SimulationPhase,

    /// Outstanding loan balance
    pub loan_balance: f64,

    /// Accumulated investment value
    pub investment_value: f64,

    /// Total contributions deposited to date
    pub contributed_to_date: f64,

    /// Contributions deposited during this year
    pub contributed_this_year: f64,

    /// Interest credited to the investment during this year
    pub interest_credited_this_year: f64,

    /// Cumulative loan interest paid to date
    pub interest_paid_to_date: f64,

    /// Investment value minus loan balance
    pub net_worth: f64,
}

/// Complete result of a single projection routine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Year-by-year breakdown, ordered by year
    pub snapshots: Vec<YearlySnapshot>,

    /// Investment value at the end of the horizon
    pub final_value: f64,

    /// Net worth at the end of the horizon
    pub final_net_worth: f64,

    /// Total amount contributed to the investment
    pub total_contributed: f64,

    /// Total interest credited to the investment
    pub total_interest_credited: f64,

    /// Total loan interest paid over the horizon
    pub total_interest_paid: f64,

    /// Month the loan balance reached zero, if it did
    pub loan_cleared_month: Option<u32>,
}

impl ScenarioResult {
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
            final_value: 0.0,
            final_net_worth: 0.0,
            total_contributed: 0.0,
            total_interest_credited: 0.0,
            total_interest_paid: 0.0,
            loan_cleared_month: None,
        }
    }

    /// Add a snapshot row
    pub fn add_snapshot(&mut self, snapshot: YearlySnapshot) {
        self.snapshots.push(snapshot);
    }

    /// Finalize summary scalars from the last snapshot
    pub fn finalize(&mut self) {
        if let Some(last) = self.snapshots.last() {
            self.final_value = last.investment_value;
            self.final_net_worth = last.net_worth;
            self.total_contributed = last.contributed_to_date;
            self.total_interest_paid = last.interest_paid_to_date;
        }
        self.total_interest_credited = self
            .snapshots
            .iter()
            .map(|s| s.interest_credited_this_year)
            .sum();
    }
}

impl Default for ScenarioResult {
    fn default() -> Self {
        Self::new()
    }
}

/// The strategy a comparison recommends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Keep paying the scheduled EMI and invest the surplus
    ContinueAndInvest,
    /// Prepay the loan, then invest the freed cash flow
    PrepayThenInvest,
}

/// Outcome of comparing the two strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// Strategy with the higher final net worth
    pub recommended: Strategy,

    /// Absolute net-worth difference between the two strategies
    pub advantage: f64,

    /// Final net worth under continue-and-invest
    pub net_worth_continue: f64,

    /// Final net worth under prepay-then-invest
    pub net_worth_prepay: f64,
}

/// Both scenario trajectories plus the verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparison {
    /// Scenario A: continue EMI, invest the surplus
    pub scenario_a: ScenarioResult,

    /// Scenario B: prepay, then invest the freed cash flow
    pub scenario_b: ScenarioResult,

    /// Which strategy wins and by how much
    pub verdict: Verdict,
}
