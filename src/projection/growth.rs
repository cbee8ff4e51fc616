//! Compound growth projection under annual crediting
//!
//! Models statutory PPF/FD-style accounting: contributions join the running
//! balance immediately, and interest is credited once per completed year on
//! the balance that already includes the year's contributions. A trailing
//! partial year carries contributions but no interest.

use crate::error::{EngineError, EngineResult};
use crate::plan::{ContributionPlan, Frequency};
use crate::projection::snapshots::{ScenarioResult, SimulationPhase, YearlySnapshot};
use crate::projection::state::InvestmentState;

/// Project the future value of a recurring-contribution plan.
///
/// Returns one `YearlySnapshot` per completed year, plus a final
/// partial-year snapshot when the plan does not end on a year boundary.
pub fn project_contribution_growth(
    periodic_amount: f64,
    annual_rate_percent: f64,
    total_months: u32,
    frequency: Frequency,
) -> EngineResult<ScenarioResult> {
    let plan = ContributionPlan::new(periodic_amount, annual_rate_percent, total_months, frequency)?;
    Ok(project_plan(&plan))
}

/// Project a validated contribution plan.
pub fn project_plan(plan: &ContributionPlan) -> ScenarioResult {
    let amount = plan.periodic_amount;
    run_annual_crediting(plan.total_months, plan.annual_rate(), |month| {
        if plan.contributes_in_month(month) {
            amount
        } else {
            0.0
        }
    })
}

/// Project a single opening deposit (fixed-deposit maturity).
///
/// The deposit lands in month 1; thereafter the crediting schedule is
/// identical to the recurring-contribution projector.
pub fn project_lump_sum(
    principal: f64,
    annual_rate_percent: f64,
    total_months: u32,
) -> EngineResult<ScenarioResult> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(EngineError::invalid("principal", "must be positive"));
    }
    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return Err(EngineError::invalid(
            "annual_rate_percent",
            "must be non-negative",
        ));
    }
    if total_months == 0 {
        return Err(EngineError::invalid("total_months", "must be positive"));
    }

    Ok(run_annual_crediting(
        total_months,
        annual_rate_percent / 100.0,
        |month| if month == 1 { principal } else { 0.0 },
    ))
}

/// Month loop shared by the recurring and lump-sum projectors.
///
/// `deposit_for_month` returns the amount landing in a given month
/// (1-indexed); interest credits at every 12th month on the running
/// balance, and the final month of a partial year emits a snapshot
/// without crediting.
fn run_annual_crediting<F>(total_months: u32, annual_rate: f64, deposit_for_month: F) -> ScenarioResult
where
    F: Fn(u32) -> f64,
{
    let mut result = ScenarioResult::new();
    let mut invest = InvestmentState::new();

    for month in 1..=total_months {
        let deposit = deposit_for_month(month);
        if deposit > 0.0 {
            invest.deposit(deposit);
        }

        if month % 12 == 0 {
            let credited = invest.credit_annual(annual_rate);
            result.add_snapshot(growth_snapshot(month, &invest, credited));
            invest.begin_year();
        } else if month == total_months {
            // Trailing partial year: contributions only, no interest
            result.add_snapshot(growth_snapshot(month, &invest, 0.0));
        }
    }

    result.finalize();
    result
}

fn growth_snapshot(month: u32, invest: &InvestmentState, credited: f64) -> YearlySnapshot {
    YearlySnapshot {
        year: (month + 11) / 12,
        months_elapsed: month,
        phase: SimulationPhase::InvestmentOnly,
        loan_balance: 0.0,
        investment_value: invest.value,
        contributed_to_date: invest.contributed,
        contributed_this_year: invest.contributed_this_year,
        interest_credited_this_year: credited,
        interest_paid_to_date: 0.0,
        net_worth: invest.value,
    }
}

/// Closed-form future value of a contribution plan.
///
/// Each contribution compounds once per year boundary it sits through:
/// a contribution landing in year y of a plan with Y full years earns
/// (1 + r)^(Y - y + 1); contributions in a trailing partial year earn
/// nothing. Agrees with the iterative loop to float precision, and is
/// used as a cross-check in tests.
pub fn future_value_closed_form(plan: &ContributionPlan) -> f64 {
    let full_years = plan.total_months / 12;
    let rate = plan.annual_rate();
    let interval = plan.frequency.interval_months();

    let mut fv = 0.0;
    let mut month = 1;
    while month <= plan.total_months {
        let contribution_year = (month + 11) / 12;
        let boundaries = if contribution_year <= full_years {
            full_years - contribution_year + 1
        } else {
            0
        };
        fv += plan.periodic_amount * (1.0 + rate).powi(boundaries as i32);
        month += interval;
    }
    fv
}
