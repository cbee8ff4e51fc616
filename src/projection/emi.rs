//! Equated monthly installment calculation

use crate::error::EngineResult;
use crate::plan::LoanTerms;

/// Compute the fixed monthly installment that fully amortizes a loan.
///
/// The result is rounded to the nearest currency unit. At a zero rate the
/// installment degenerates to principal / tenure.
///
/// # Arguments
/// * `principal` - outstanding loan amount, must be positive
/// * `annual_rate_percent` - annual interest rate in percent (0-100)
/// * `tenure_months` - number of monthly installments, must be positive
pub fn compute_emi(principal: f64, annual_rate_percent: f64, tenure_months: u32) -> EngineResult<f64> {
    let terms = LoanTerms::new(principal, annual_rate_percent, tenure_months)?;
    Ok(required_payment(&terms).round())
}

/// Unrounded scheduled payment for a set of loan terms.
///
/// E = P * r * (1+r)^N / ((1+r)^N - 1) with r = R/1200.
/// Used internally where rounding would accumulate across a simulation.
pub fn required_payment(terms: &LoanTerms) -> f64 {
    let r = terms.monthly_rate();
    let n = terms.tenure_months;

    if r == 0.0 {
        return terms.principal / n as f64;
    }

    let growth = (1.0 + r).powi(n as i32);
    terms.principal * r * growth / (growth - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::projection::state::AmortizationState;

    #[test]
    fn test_zero_rate_is_straight_line() {
        let emi = compute_emi(120_000.0, 0.0, 120).unwrap();
        assert_eq!(emi, 1_000.0);

        let emi = compute_emi(100_000.0, 0.0, 7).unwrap();
        assert_eq!(emi, (100_000.0_f64 / 7.0).round());
    }

    #[test]
    fn test_reference_loan() {
        // 50 lakh at 8.5% over 10 years
        let emi = compute_emi(5_000_000.0, 8.5, 120).unwrap();
        assert!((emi - 61_993.0).abs() <= 5.0, "EMI was {}", emi);
    }

    #[test]
    fn test_payments_cover_principal() {
        for &(p, r, n) in &[
            (100_000.0, 1.0, 12u32),
            (250_000.0, 7.25, 60),
            (5_000_000.0, 8.5, 120),
            (1_000_000.0, 12.0, 360),
        ] {
            let emi = compute_emi(p, r, n).unwrap();
            assert!(
                emi * n as f64 >= p,
                "{} payments of {} do not cover principal {}",
                n,
                emi,
                p
            );
        }
    }

    #[test]
    fn test_required_payment_amortizes_exactly() {
        // Running the unrounded payment through the amortization loop
        // must land the balance on zero at the final month.
        let terms = LoanTerms::new(750_000.0, 9.25, 84).unwrap();
        let payment = required_payment(&terms);

        let mut state = AmortizationState::new(terms.principal);
        for _ in 0..terms.tenure_months {
            state.step(payment, terms.monthly_rate());
        }
        assert!(
            state.balance.abs() < 0.01,
            "residual balance {}",
            state.balance
        );
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(matches!(
            compute_emi(0.0, 8.5, 120),
            Err(EngineError::InvalidParameter { name: "principal", .. })
        ));
        assert!(matches!(
            compute_emi(-100.0, 8.5, 120),
            Err(EngineError::InvalidParameter { name: "principal", .. })
        ));
        assert!(matches!(
            compute_emi(100_000.0, 8.5, 0),
            Err(EngineError::InvalidParameter { name: "tenure_months", .. })
        ));
        assert!(compute_emi(100_000.0, -2.0, 12).is_err());
    }
}
