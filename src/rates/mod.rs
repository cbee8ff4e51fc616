//! Bank fixed-deposit rate sheets and maturity quotes

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::projection::project_lump_sum;

/// Ownership category of a bank, used for grouping in comparison tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BankCategory {
    PublicSector,
    Private,
    SmallFinance,
}

impl BankCategory {
    /// Display label matching the dataset format
    pub fn as_str(&self) -> &'static str {
        match self {
            BankCategory::PublicSector => "public-sector",
            BankCategory::Private => "private",
            BankCategory::SmallFinance => "small-finance",
        }
    }
}

/// One tenure slab of a bank's rate card
///
/// Covers deposits of `min_months` (inclusive) up to `max_months`
/// (exclusive), the way published rate cards express "1 year to less
/// than 2 years".
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateSlab {
    /// Slab lower bound in months, inclusive
    pub min_months: u32,

    /// Slab upper bound in months, exclusive
    pub max_months: u32,

    /// Annual rate in percent for regular depositors
    pub regular_rate: f64,

    /// Annual rate in percent for senior citizens
    pub senior_rate: f64,
}

impl RateSlab {
    /// Whether a tenure falls inside this slab
    pub fn covers(&self, months: u32) -> bool {
        months >= self.min_months && months < self.max_months
    }
}

/// Rate card for a single bank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankRates {
    /// Bank display name
    pub bank: String,

    /// Ownership category
    pub category: BankCategory,

    /// Tenure slabs, ordered by min_months
    pub slabs: Vec<RateSlab>,
}

impl BankRates {
    /// Rate for a tenure, if the bank offers that tenure at all
    pub fn rate_for(&self, months: u32, senior: bool) -> Option<f64> {
        self.slabs.iter().find(|s| s.covers(months)).map(|s| {
            if senior {
                s.senior_rate
            } else {
                s.regular_rate
            }
        })
    }
}

/// A single bank's maturity quote for a given deposit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FdQuote {
    /// Bank display name
    pub bank: String,

    /// Ownership category
    pub category: BankCategory,

    /// Annual rate applied, in percent
    pub annual_rate_percent: f64,

    /// Value at maturity
    pub maturity_value: f64,

    /// Interest earned over the tenure
    pub interest_earned: f64,
}

/// A full sheet of bank rate cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSheet {
    pub banks: Vec<BankRates>,
}

impl RateSheet {
    /// Built-in sheet with representative rate cards
    ///
    /// Used when no CSV dataset is supplied; tenure coverage runs from
    /// 1 month up to (but not including) 121 months. Senior-citizen
    /// rates carry the customary 50bp premium.
    pub fn default_sheet() -> Self {
        fn card(bank: &str, category: BankCategory, rates: [f64; 6]) -> BankRates {
            let bounds = [(1, 6), (6, 12), (12, 24), (24, 36), (36, 60), (60, 121)];
            BankRates {
                bank: bank.to_string(),
                category,
                slabs: bounds
                    .iter()
                    .zip(rates.iter())
                    .map(|(&(lo, hi), &r)| RateSlab {
                        min_months: lo,
                        max_months: hi,
                        regular_rate: r,
                        senior_rate: r + 0.5,
                    })
                    .collect(),
            }
        }

        Self {
            banks: vec![
                card(
                    "State Bank of India",
                    BankCategory::PublicSector,
                    [5.50, 6.25, 6.80, 7.00, 6.75, 6.50],
                ),
                card(
                    "Bank of Baroda",
                    BankCategory::PublicSector,
                    [5.60, 6.25, 6.85, 7.15, 6.80, 6.50],
                ),
                card(
                    "Punjab National Bank",
                    BankCategory::PublicSector,
                    [5.50, 6.30, 6.80, 7.00, 6.50, 6.50],
                ),
                card(
                    "HDFC Bank",
                    BankCategory::Private,
                    [5.75, 6.60, 7.10, 7.15, 7.20, 7.00],
                ),
                card(
                    "ICICI Bank",
                    BankCategory::Private,
                    [5.75, 6.70, 7.10, 7.25, 7.00, 6.90],
                ),
                card(
                    "Axis Bank",
                    BankCategory::Private,
                    [5.75, 6.70, 7.20, 7.10, 7.10, 7.00],
                ),
                card(
                    "AU Small Finance Bank",
                    BankCategory::SmallFinance,
                    [6.00, 7.00, 7.85, 7.75, 7.50, 7.25],
                ),
                card(
                    "Ujjivan Small Finance Bank",
                    BankCategory::SmallFinance,
                    [6.25, 7.10, 8.10, 7.80, 7.40, 7.20],
                ),
            ],
        }
    }

    /// Load the sheet from the default CSV dataset (data/fd_rates.csv)
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        loader::load_rate_sheet(std::path::Path::new(loader::DEFAULT_RATES_PATH))
    }

    /// Load a sheet from a CSV rate card (see `loader`)
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        loader::load_rate_sheet(path)
    }

    /// Look up one bank's rate by name (case-insensitive)
    pub fn rate_for(&self, bank: &str, months: u32, senior: bool) -> Option<f64> {
        self.banks
            .iter()
            .find(|b| b.bank.eq_ignore_ascii_case(bank))
            .and_then(|b| b.rate_for(months, senior))
    }

    /// Maturity quotes for every bank covering the tenure, best first
    pub fn best_quotes(&self, amount: f64, months: u32, senior: bool) -> EngineResult<Vec<FdQuote>> {
        let mut quotes = Vec::new();
        for bank in &self.banks {
            if let Some(rate) = bank.rate_for(months, senior) {
                let projection = project_lump_sum(amount, rate, months)?;
                quotes.push(FdQuote {
                    bank: bank.bank.clone(),
                    category: bank.category,
                    annual_rate_percent: rate,
                    maturity_value: projection.final_value,
                    interest_earned: projection.final_value - amount,
                });
            }
        }
        quotes.sort_by(|a, b| b.maturity_value.total_cmp(&a.maturity_value));
        Ok(quotes)
    }
}
