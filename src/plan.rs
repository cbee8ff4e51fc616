//! Input value types for the projection engine
//!
//! All inputs are immutable value structures validated at construction;
//! a calculation never sees an out-of-contract parameter.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Contribution frequency for recurring deposits
///
/// Maps once to an interval in months; no string dispatch downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Monthly,
    Quarterly,
    HalfYearly,
    Yearly,
}

impl Frequency {
    /// Months between consecutive contributions
    pub fn interval_months(&self) -> u32 {
        match self {
            Frequency::Monthly => 1,
            Frequency::Quarterly => 3,
            Frequency::HalfYearly => 6,
            Frequency::Yearly => 12,
        }
    }

    /// Contributions made per full year
    pub fn periods_per_year(&self) -> u32 {
        12 / self.interval_months()
    }

    /// Display label matching the dataset/CLI format
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::HalfYearly => "half-yearly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "half-yearly" | "halfyearly" => Ok(Frequency::HalfYearly),
            "yearly" | "annual" => Ok(Frequency::Yearly),
            other => Err(EngineError::invalid(
                "frequency",
                format!("unknown frequency `{}`", other),
            )),
        }
    }
}

/// Terms of an amortized loan
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Outstanding principal
    pub principal: f64,

    /// Annual interest rate in percent (0-100)
    pub annual_rate_percent: f64,

    /// Remaining tenure in months
    pub tenure_months: u32,
}

impl LoanTerms {
    /// Validate and construct loan terms
    pub fn new(principal: f64, annual_rate_percent: f64, tenure_months: u32) -> EngineResult<Self> {
        if !principal.is_finite() || principal <= 0.0 {
            return Err(EngineError::invalid("principal", "must be positive"));
        }
        if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
            return Err(EngineError::invalid(
                "annual_rate_percent",
                "must be non-negative",
            ));
        }
        if annual_rate_percent > 100.0 {
            return Err(EngineError::invalid(
                "annual_rate_percent",
                "must not exceed 100",
            ));
        }
        if tenure_months == 0 {
            return Err(EngineError::invalid("tenure_months", "must be positive"));
        }
        Ok(Self {
            principal,
            annual_rate_percent,
            tenure_months,
        })
    }

    /// Interest rate per month as a decimal (R / 1200)
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 1200.0
    }
}

/// A recurring-contribution savings plan (PPF/recurring-deposit style)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContributionPlan {
    /// Amount deposited at the start of each interval
    pub periodic_amount: f64,

    /// Annual interest rate in percent
    pub annual_rate_percent: f64,

    /// Total plan duration in months
    pub total_months: u32,

    /// How often contributions land
    pub frequency: Frequency,
}

impl ContributionPlan {
    /// Validate and construct a contribution plan
    pub fn new(
        periodic_amount: f64,
        annual_rate_percent: f64,
        total_months: u32,
        frequency: Frequency,
    ) -> EngineResult<Self> {
        if !periodic_amount.is_finite() || periodic_amount < 0.0 {
            return Err(EngineError::invalid(
                "periodic_amount",
                "must be non-negative",
            ));
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
        Ok(Self {
            periodic_amount,
            annual_rate_percent,
            total_months,
            frequency,
        })
    }

    /// Annual interest rate as a decimal
    pub fn annual_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0
    }

    /// Whether a contribution lands in the given month (1-indexed)
    ///
    /// A contribution lands on the first month of each interval.
    pub fn contributes_in_month(&self, month: u32) -> bool {
        (month - 1) % self.frequency.interval_months() == 0
    }
}
