//! CSV-based rate sheet loader
//!
//! Loads bank FD rate cards from a CSV file with columns:
//! bank, category, min_months, max_months, regular_rate, senior_rate

use std::error::Error;
use std::fs::File;
use std::path::Path;

use super::{BankCategory, BankRates, RateSheet, RateSlab};

/// Default path to the rate dataset
pub const DEFAULT_RATES_PATH: &str = "data/fd_rates.csv";

fn parse_category(s: &str) -> Result<BankCategory, Box<dyn Error>> {
    match s.trim().to_ascii_lowercase().as_str() {
        "public-sector" | "public" => Ok(BankCategory::PublicSector),
        "private" => Ok(BankCategory::Private),
        "small-finance" => Ok(BankCategory::SmallFinance),
        other => Err(format!("unknown bank category: {}", other).into()),
    }
}

/// Load a rate sheet from a CSV file
///
/// Rows for the same bank are merged into one card; slabs keep file order
/// and are sorted by their lower bound afterwards.
pub fn load_rate_sheet(path: &Path) -> Result<RateSheet, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut banks: Vec<BankRates> = Vec::new();

    for result in reader.records() {
        let record = result?;
        let bank = record[0].trim().to_string();
        let category = parse_category(&record[1])?;
        let slab = RateSlab {
            min_months: record[2].trim().parse()?,
            max_months: record[3].trim().parse()?,
            regular_rate: record[4].trim().parse()?,
            senior_rate: record[5].trim().parse()?,
        };

        match banks.iter_mut().find(|b| b.bank == bank) {
            Some(existing) => existing.slabs.push(slab),
            None => banks.push(BankRates {
                bank,
                category,
                slabs: vec![slab],
            }),
        }
    }

    for bank in &mut banks {
        bank.slabs.sort_by_key(|s| s.min_months);
    }

    log::debug!("loaded rate cards for {} banks from {:?}", banks.len(), path);

    Ok(RateSheet { banks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("fincalc_{}_{}", std::process::id(), name));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_rate_sheet() {
        let path = write_fixture(
            "rates.csv",
            "bank,category,min_months,max_months,regular_rate,senior_rate\n\
             Test Bank,private,12,24,7.10,7.60\n\
             Test Bank,private,1,12,6.00,6.50\n\
             Other Bank,public-sector,12,24,6.80,7.30\n",
        );

        let sheet = load_rate_sheet(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(sheet.banks.len(), 2);
        // Slabs sorted by lower bound despite file order
        assert_eq!(sheet.banks[0].slabs[0].min_months, 1);
        assert_eq!(sheet.rate_for("Test Bank", 18, false), Some(7.10));
        assert_eq!(sheet.rate_for("Other Bank", 12, true), Some(7.30));
    }

    #[test]
    fn test_load_default_dataset() {
        let sheet = load_rate_sheet(Path::new(DEFAULT_RATES_PATH)).unwrap();

        assert!(sheet.banks.len() >= 6);
        // Every card covers the standard 1-year tenure
        for bank in &sheet.banks {
            assert!(
                bank.rate_for(12, false).is_some(),
                "{} has no 12-month rate",
                bank.bank
            );
        }
    }

    #[test]
    fn test_bad_category_rejected() {
        let path = write_fixture(
            "bad_rates.csv",
            "bank,category,min_months,max_months,regular_rate,senior_rate\n\
             Test Bank,cooperative,12,24,7.10,7.60\n",
        );

        let result = load_rate_sheet(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
