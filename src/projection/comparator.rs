//! Dual-scenario loan prepayment vs. investment comparison
//!
//! Simulates two competing strategies month-by-month over a shared horizon:
//!
//! * **Scenario A (continue + invest)** keeps paying the scheduled EMI and
//!   routes the monthly surplus into an investment.
//! * **Scenario B (prepay, then invest)** throws EMI + surplus at the loan
//!   until it clears, then routes the full freed cash flow into the
//!   investment.
//!
//! Investment accrual uses the same annual-crediting convention as the
//! growth projector, so comparator output lines up with the PPF/FD
//! calculators. The loan side accrues monthly at R/1200 in both scenarios.

use crate::error::{EngineError, EngineResult};
use crate::plan::LoanTerms;
use crate::projection::snapshots::{
    ScenarioResult, SimulationPhase, Strategy, StrategyComparison, Verdict, YearlySnapshot,
};
use crate::projection::state::{AmortizationState, InvestmentState};

/// Hard iteration bound for the prepayment loop.
///
/// A payment stream that cannot clear the loan inside 50 years is treated
/// as non-convergent rather than simulated further.
pub const MAX_SIMULATION_MONTHS: u32 = 600;

/// Compare the two strategies over the loan's remaining tenure.
///
/// `current_emi` is the payment actually being made, which may differ from
/// the mathematically required installment (an underpaying schedule is
/// valid as long as it covers the interest accrual).
pub fn compare_loan_strategies(
    principal: f64,
    current_emi: f64,
    annual_rate_percent: f64,
    remaining_tenure_months: u32,
    monthly_surplus: f64,
    investment_return_percent: f64,
) -> EngineResult<StrategyComparison> {
    let terms = LoanTerms::new(principal, annual_rate_percent, remaining_tenure_months)?;
    if !current_emi.is_finite() || current_emi <= 0.0 {
        return Err(EngineError::invalid("current_emi", "must be positive"));
    }
    if !monthly_surplus.is_finite() || monthly_surplus < 0.0 {
        return Err(EngineError::invalid(
            "monthly_surplus",
            "must be non-negative",
        ));
    }
    if !investment_return_percent.is_finite() || investment_return_percent < 0.0 {
        return Err(EngineError::invalid(
            "investment_return_percent",
            "must be non-negative",
        ));
    }

    // A payment stream at or below the opening interest accrual can never
    // reduce the balance; reject up front instead of looping to the cap.
    let first_month_interest = terms.principal * terms.monthly_rate();
    if current_emi + monthly_surplus <= first_month_interest {
        return Err(EngineError::NonConvergent {
            months: MAX_SIMULATION_MONTHS,
        });
    }

    let annual_return = investment_return_percent / 100.0;
    let scenario_a = run_continue_and_invest(&terms, current_emi, monthly_surplus, annual_return);
    let scenario_b = run_prepay_then_invest(&terms, current_emi, monthly_surplus, annual_return)?;

    let net_a = scenario_a.final_net_worth;
    let net_b = scenario_b.final_net_worth;
    let verdict = Verdict {
        // An exact tie recommends the debt-free position
        recommended: if net_b >= net_a {
            Strategy::PrepayThenInvest
        } else {
            Strategy::ContinueAndInvest
        },
        advantage: (net_b - net_a).abs(),
        net_worth_continue: net_a,
        net_worth_prepay: net_b,
    };

    Ok(StrategyComparison {
        scenario_a,
        scenario_b,
        verdict,
    })
}

/// Scenario A: pay the scheduled EMI, invest the surplus each month.
///
/// Once the balance reaches zero the scheduled payment simply stops;
/// only the surplus keeps flowing into the investment.
fn run_continue_and_invest(
    terms: &LoanTerms,
    emi: f64,
    surplus: f64,
    annual_return: f64,
) -> ScenarioResult {
    let mut result = ScenarioResult::new();
    let mut loan = AmortizationState::new(terms.principal);
    let mut invest = InvestmentState::new();
    let monthly_rate = terms.monthly_rate();

    for month in 1..=terms.tenure_months {
        if !loan.is_cleared() {
            loan.step(emi, monthly_rate);
            if loan.is_cleared() {
                result.loan_cleared_month = Some(month);
            }
        }

        if surplus > 0.0 {
            invest.deposit(surplus);
        }

        emit_yearly(
            &mut result,
            month,
            terms.tenure_months,
            &loan,
            &mut invest,
            annual_return,
        );
    }

    result.finalize();
    result
}

/// Scenario B: direct EMI + surplus at the loan until it clears, then
/// redirect the full amount into the investment.
///
/// In the clearing month the payoff is capped at balance + interest and
/// the residual budget goes straight into the investment, so both
/// scenarios deploy the same cash every month of the horizon.
fn run_prepay_then_invest(
    terms: &LoanTerms,
    emi: f64,
    surplus: f64,
    annual_return: f64,
) -> EngineResult<ScenarioResult> {
    let budget = emi + surplus;
    let mut result = ScenarioResult::new();
    let mut loan = AmortizationState::new(terms.principal);
    let mut invest = InvestmentState::new();
    let monthly_rate = terms.monthly_rate();

    for month in 1..=terms.tenure_months {
        if !loan.is_cleared() {
            let paid = loan.step(budget, monthly_rate);
            if loan.is_cleared() {
                result.loan_cleared_month = Some(month);
                let residual = budget - paid;
                if residual > 0.0 {
                    invest.deposit(residual);
                }
            } else if month >= MAX_SIMULATION_MONTHS {
                return Err(EngineError::NonConvergent {
                    months: MAX_SIMULATION_MONTHS,
                });
            }
        } else {
            invest.deposit(budget);
        }

        emit_yearly(
            &mut result,
            month,
            terms.tenure_months,
            &loan,
            &mut invest,
            annual_return,
        );
    }

    result.finalize();
    Ok(result)
}

/// Credit interest and record a snapshot at year boundaries, plus an
/// uncredited snapshot at the final month of a partial year.
fn emit_yearly(
    result: &mut ScenarioResult,
    month: u32,
    horizon: u32,
    loan: &AmortizationState,
    invest: &mut InvestmentState,
    annual_return: f64,
) {
    if month % 12 == 0 {
        let credited = invest.credit_annual(annual_return);
        result.add_snapshot(comparison_snapshot(month, loan, invest, credited));
        invest.begin_year();
    } else if month == horizon {
        result.add_snapshot(comparison_snapshot(month, loan, invest, 0.0));
    }
}

fn comparison_snapshot(
    month: u32,
    loan: &AmortizationState,
    invest: &InvestmentState,
    credited: f64,
) -> YearlySnapshot {
    YearlySnapshot {
        year: (month + 11) / 12,
        months_elapsed: month,
        phase: if loan.is_cleared() {
            SimulationPhase::InvestmentOnly
        } else {
            SimulationPhase::LoanRepayment
        },
        loan_balance: loan.balance,
        investment_value: invest.value,
        contributed_to_date: invest.contributed,
        contributed_this_year: invest.contributed_this_year,
        interest_credited_this_year: credited,
        interest_paid_to_date: loan.interest_paid,
        net_worth: invest.value - loan.balance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::emi::compute_emi;

    #[test]
    fn test_prepayment_dominates_at_zero_return() {
        // Surplus large enough to clear the loan in month 1, zero-return
        // investing: prepayment saves interest and must win.
        let emi = compute_emi(500_000.0, 9.0, 24).unwrap();
        let comparison =
            compare_loan_strategies(500_000.0, emi, 9.0, 24, 600_000.0, 0.0).unwrap();

        assert_eq!(comparison.scenario_b.loan_cleared_month, Some(1));
        assert!(
            comparison.verdict.net_worth_prepay >= comparison.verdict.net_worth_continue
        );
        assert_eq!(comparison.verdict.recommended, Strategy::PrepayThenInvest);
        // B saves almost all of A's loan interest
        assert!(
            comparison.scenario_b.total_interest_paid
                < comparison.scenario_a.total_interest_paid
        );
    }

    #[test]
    fn test_underpaying_emi_still_converges() {
        // 50 lakh at 8.5% with a 45k payment: below the required ~62k EMI,
        // but above the ~35.4k opening interest, so the balance must shrink.
        let comparison =
            compare_loan_strategies(5_000_000.0, 45_000.0, 8.5, 120, 0.0, 0.0).unwrap();

        // Not cleared inside the 120-month horizon
        assert_eq!(comparison.scenario_b.loan_cleared_month, None);
        let first = &comparison.scenario_b.snapshots[0];
        assert!(first.loan_balance < 5_000_000.0);
        assert_eq!(first.phase, SimulationPhase::LoanRepayment);

        // Balance strictly decreasing month over month
        let mut state = AmortizationState::new(5_000_000.0);
        state.step(45_000.0, 8.5 / 1200.0);
        let after_month_1 = state.balance;
        state.step(45_000.0, 8.5 / 1200.0);
        assert!(after_month_1 < 5_000_000.0);
        assert!(state.balance < after_month_1);
    }

    #[test]
    fn test_non_convergent_payment_rejected() {
        // Monthly interest ~16,667 exceeds the 1,000 payment
        let result = compare_loan_strategies(1_000_000.0, 1_000.0, 20.0, 120, 0.0, 0.0);
        assert_eq!(
            result.unwrap_err(),
            EngineError::NonConvergent {
                months: MAX_SIMULATION_MONTHS
            }
        );
    }

    #[test]
    fn test_phase_transition() {
        let emi = compute_emi(100_000.0, 8.0, 48).unwrap();
        let comparison =
            compare_loan_strategies(100_000.0, emi, 8.0, 48, 5_000.0, 6.0).unwrap();

        let cleared = comparison.scenario_b.loan_cleared_month.unwrap();
        assert!(cleared < 48);

        for snap in &comparison.scenario_b.snapshots {
            if snap.months_elapsed < cleared {
                assert_eq!(snap.phase, SimulationPhase::LoanRepayment);
                assert!(snap.loan_balance > 0.0);
            } else {
                assert_eq!(snap.phase, SimulationPhase::InvestmentOnly);
                assert_eq!(snap.loan_balance, 0.0);
            }
        }
    }

    #[test]
    fn test_shared_horizon_alignment() {
        let comparison =
            compare_loan_strategies(800_000.0, 12_000.0, 9.5, 90, 3_000.0, 7.0).unwrap();

        let months_a: Vec<u32> = comparison
            .scenario_a
            .snapshots
            .iter()
            .map(|s| s.months_elapsed)
            .collect();
        let months_b: Vec<u32> = comparison
            .scenario_b
            .snapshots
            .iter()
            .map(|s| s.months_elapsed)
            .collect();

        assert_eq!(months_a, months_b);
        assert_eq!(*months_a.last().unwrap(), 90);
        // ceil(90 / 12) = 8 snapshots
        assert_eq!(months_a.len(), 8);
    }

    #[test]
    fn test_scenario_a_contributions() {
        let comparison =
            compare_loan_strategies(800_000.0, 12_000.0, 9.5, 60, 3_000.0, 7.0).unwrap();
        assert!(
            (comparison.scenario_a.total_contributed - 3_000.0 * 60.0).abs() < 1e-6
        );
    }

    #[test]
    fn test_zero_rate_zero_surplus_is_a_tie() {
        // Identical cash flow on both sides: verdict ties toward prepayment
        let comparison =
            compare_loan_strategies(120_000.0, 10_000.0, 0.0, 12, 0.0, 0.0).unwrap();

        assert!(comparison.verdict.advantage.abs() < 1e-6);
        assert_eq!(comparison.verdict.recommended, Strategy::PrepayThenInvest);
        assert_eq!(comparison.scenario_a.loan_cleared_month, Some(12));
        assert_eq!(comparison.scenario_b.loan_cleared_month, Some(12));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(compare_loan_strategies(0.0, 10_000.0, 8.0, 60, 0.0, 7.0).is_err());
        assert!(compare_loan_strategies(500_000.0, 0.0, 8.0, 60, 0.0, 7.0).is_err());
        assert!(compare_loan_strategies(500_000.0, 10_000.0, 8.0, 0, 0.0, 7.0).is_err());
        assert!(compare_loan_strategies(500_000.0, 10_000.0, 8.0, 60, -1.0, 7.0).is_err());
        assert!(compare_loan_strategies(500_000.0, 10_000.0, 8.0, 60, 0.0, -7.0).is_err());
    }
}
