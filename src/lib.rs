//! Fincalc - financial projection engine for deposit and loan planning
//!
//! This library provides:
//! - EMI calculation for amortized loans
//! - Compound growth projection with periodic contributions (PPF-style
//!   annual crediting) and lump-sum deposits (fixed-deposit maturity)
//! - Dual-scenario comparison of loan prepayment vs. surplus investing
//! - Bank fixed-deposit rate sheets with ranked maturity quotes
//! - A file-backed store for saving computed results

pub mod error;
pub mod plan;
pub mod projection;
pub mod rates;
pub mod scenario;
pub mod store;

// Re-export commonly used types
pub use error::{EngineError, EngineResult};
pub use plan::{ContributionPlan, Frequency, LoanTerms};
pub use projection::{
    compare_loan_strategies, compute_emi, project_contribution_growth, project_lump_sum,
    ScenarioResult, StrategyComparison, Verdict, YearlySnapshot,
};
pub use rates::RateSheet;
pub use scenario::SweepRunner;
pub use store::CalculationStore;
