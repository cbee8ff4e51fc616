//! Sweep runner for batch quote generation
//!
//! Pre-loads a rate sheet once, then allows producing many quote sets
//! without re-reading the dataset.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::rates::{FdQuote, RateSheet};

/// Quotes for every bank at one tenure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenureQuotes {
    /// Deposit tenure in months
    pub months: u32,

    /// Per-bank quotes, best maturity first
    pub quotes: Vec<FdQuote>,
}

/// Pre-loaded runner for batch fixed-deposit quoting
///
/// # Example
/// ```ignore
/// let runner = SweepRunner::new();
/// for row in runner.quote_grid(100_000.0, &[12, 24, 36], false)? {
///     println!("{} months: best {}", row.months, row.quotes[0].bank);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SweepRunner {
    sheet: RateSheet,
}

impl SweepRunner {
    /// Create a runner over the built-in rate sheet
    pub fn new() -> Self {
        Self {
            sheet: RateSheet::default_sheet(),
        }
    }

    /// Create a runner from the default CSV dataset
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            sheet: RateSheet::from_csv()?,
        })
    }

    /// Create a runner from a CSV rate dataset
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            sheet: RateSheet::from_csv_path(path)?,
        })
    }

    /// Create a runner with a pre-built sheet
    pub fn with_sheet(sheet: RateSheet) -> Self {
        Self { sheet }
    }

    /// Ranked quotes for a single deposit
    pub fn quotes(&self, amount: f64, months: u32, senior: bool) -> EngineResult<Vec<FdQuote>> {
        self.sheet.best_quotes(amount, months, senior)
    }

    /// Quotes for the same deposit across several tenures
    pub fn quote_grid(
        &self,
        amount: f64,
        tenures: &[u32],
        senior: bool,
    ) -> EngineResult<Vec<TenureQuotes>> {
        tenures
            .iter()
            .map(|&months| {
                Ok(TenureQuotes {
                    months,
                    quotes: self.sheet.best_quotes(amount, months, senior)?,
                })
            })
            .collect()
    }

    /// Get reference to the underlying sheet
    pub fn sheet(&self) -> &RateSheet {
        &self.sheet
    }
}

impl Default for SweepRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_grid() {
        let runner = SweepRunner::new();
        let grid = runner.quote_grid(200_000.0, &[12, 24, 60], false).unwrap();

        assert_eq!(grid.len(), 3);
        for row in &grid {
            assert!(!row.quotes.is_empty());
            // Longer money earns more at any given bank only if the rate
            // says so; within a row the ordering contract is by maturity
            for pair in row.quotes.windows(2) {
                assert!(pair[0].maturity_value >= pair[1].maturity_value);
            }
        }
    }

    #[test]
    fn test_senior_quotes_never_worse() {
        let runner = SweepRunner::new();
        let regular = runner.quotes(100_000.0, 24, false).unwrap();
        let senior = runner.quotes(100_000.0, 24, true).unwrap();

        assert!(senior[0].maturity_value >= regular[0].maturity_value);
    }
}
