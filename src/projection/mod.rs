//! Financial projection engine: EMI, compound growth, strategy comparison

mod comparator;
mod emi;
mod growth;
mod snapshots;
mod state;

pub use comparator::{compare_loan_strategies, MAX_SIMULATION_MONTHS};
pub use emi::{compute_emi, required_payment};
pub use growth::{
    future_value_closed_form, project_contribution_growth, project_lump_sum, project_plan,
};
pub use snapshots::{
    ScenarioResult, SimulationPhase, Strategy, StrategyComparison, Verdict, YearlySnapshot,
};
pub use state::{AmortizationState, InvestmentState};
