//! Fincalc CLI
//!
//! Command-line interface for the financial projection engine: EMI,
//! fixed-deposit and PPF-style projections, prepay-vs-invest comparison,
//! and bank rate tables.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use fincalc::plan::Frequency;
use fincalc::projection::{
    compare_loan_strategies, compute_emi, project_contribution_growth, project_lump_sum,
    Strategy, YearlySnapshot,
};
use fincalc::rates::RateSheet;
use fincalc::scenario::SweepRunner;
use fincalc::store::{CalculationStore, SavedResult, DEFAULT_STORE_PATH};

#[derive(Parser)]
#[command(name = "fincalc", version, about = "Financial projection toolkit")]
struct Cli {
    /// Path of the saved-calculation file
    #[arg(long, global = true, default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,

    /// CSV rate dataset (defaults to the built-in sheet)
    #[arg(long, global = true)]
    rates_csv: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the monthly installment for a loan
    Emi {
        /// Loan principal
        principal: f64,
        /// Annual interest rate in percent
        rate: f64,
        /// Tenure in months
        months: u32,
        /// Save the result under a label
        #[arg(long)]
        save: Option<String>,
    },
    /// Fixed-deposit maturity for a lump-sum deposit
    Fd {
        /// Deposit amount
        amount: f64,
        /// Tenure in months
        months: u32,
        /// Explicit annual rate in percent (otherwise looked up by bank)
        #[arg(long)]
        rate: Option<f64>,
        /// Bank whose rate card supplies the rate
        #[arg(long)]
        bank: Option<String>,
        /// Use senior-citizen rates
        #[arg(long)]
        senior: bool,
        /// Save the result under a label
        #[arg(long)]
        save: Option<String>,
    },
    /// Recurring-contribution projection with annual crediting
    Ppf {
        /// Contribution per period
        amount: f64,
        /// Annual interest rate in percent
        #[arg(long, default_value_t = 7.1)]
        rate: f64,
        /// Plan duration in months
        #[arg(long, default_value_t = 180)]
        months: u32,
        /// Contribution frequency: monthly, quarterly, half-yearly, yearly
        #[arg(long, default_value = "monthly")]
        frequency: Frequency,
        /// Save the result under a label
        #[arg(long)]
        save: Option<String>,
    },
    /// Compare loan prepayment against investing the surplus
    Compare {
        /// Outstanding principal
        principal: f64,
        /// Current monthly installment
        emi: f64,
        /// Annual loan rate in percent
        rate: f64,
        /// Remaining tenure in months
        months: u32,
        /// Monthly surplus available
        #[arg(long, default_value_t = 0.0)]
        surplus: f64,
        /// Expected annual investment return in percent
        #[arg(long, default_value_t = 7.0)]
        invest_rate: f64,
        /// Save the result under a label
        #[arg(long)]
        save: Option<String>,
    },
    /// Rank fixed-deposit rates across banks
    Rates {
        /// Deposit amount to quote
        #[arg(default_value_t = 100_000.0)]
        amount: f64,
        /// Tenure in months
        #[arg(default_value_t = 12)]
        months: u32,
        /// Use senior-citizen rates
        #[arg(long)]
        senior: bool,
    },
    /// List saved calculations, or delete one
    Saved {
        /// Delete the entry with this id
        #[arg(long)]
        delete: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let sheet = match &cli.rates_csv {
        Some(path) => RateSheet::from_csv_path(path)
            .map_err(|e| anyhow::anyhow!("failed to load rate dataset: {}", e))?,
        None => RateSheet::default_sheet(),
    };

    match cli.command {
        Command::Emi {
            principal,
            rate,
            months,
            save,
        } => {
            let emi = compute_emi(principal, rate, months)?;
            println!("Loan: {:.2} at {}% over {} months", principal, rate, months);
            println!("EMI:  {:.0} per month", emi);
            println!("Total outgo: {:.0} ({:.0} interest)", emi * months as f64, emi * months as f64 - principal);

            if let Some(label) = save {
                let id = save_result(
                    &cli.store,
                    &label,
                    SavedResult::Emi {
                        principal,
                        annual_rate_percent: rate,
                        tenure_months: months,
                        emi,
                    },
                )?;
                println!("Saved as #{}", id);
            }
        }

        Command::Fd {
            amount,
            months,
            rate,
            bank,
            senior,
            save,
        } => {
            let rate = match (rate, &bank) {
                (Some(rate), _) => rate,
                (None, Some(bank)) => sheet
                    .rate_for(bank, months, senior)
                    .with_context(|| format!("{} has no rate for {} months", bank, months))?,
                (None, None) => anyhow::bail!("supply either --rate or --bank"),
            };

            let result = project_lump_sum(amount, rate, months)?;
            println!("Deposit {:.2} at {}% for {} months", amount, rate, months);
            print_snapshots(&result.snapshots);
            println!(
                "\nMaturity: {:.2} ({:.2} interest)",
                result.final_value,
                result.final_value - amount
            );

            if let Some(label) = save {
                let id = save_result(&cli.store, &label, SavedResult::Growth(result))?;
                println!("Saved as #{}", id);
            }
        }

        Command::Ppf {
            amount,
            rate,
            months,
            frequency,
            save,
        } => {
            let result = project_contribution_growth(amount, rate, months, frequency)?;
            println!(
                "Contributing {:.2} {} at {}% for {} months",
                amount,
                frequency.as_str(),
                rate,
                months
            );
            print_snapshots(&result.snapshots);
            println!(
                "\nMaturity: {:.2} (contributed {:.2}, interest {:.2})",
                result.final_value, result.total_contributed, result.total_interest_credited
            );

            if let Some(label) = save {
                let id = save_result(&cli.store, &label, SavedResult::Growth(result))?;
                println!("Saved as #{}", id);
            }
        }

        Command::Compare {
            principal,
            emi,
            rate,
            months,
            surplus,
            invest_rate,
            save,
        } => {
            let comparison =
                compare_loan_strategies(principal, emi, rate, months, surplus, invest_rate)?;

            println!("Scenario A: continue EMI, invest surplus");
            print_snapshots(&comparison.scenario_a.snapshots);
            println!("\nScenario B: prepay, then invest");
            print_snapshots(&comparison.scenario_b.snapshots);
            if let Some(cleared) = comparison.scenario_b.loan_cleared_month {
                println!("\nLoan clears in month {} under prepayment", cleared);
            }

            let verdict = &comparison.verdict;
            let name = match verdict.recommended {
                Strategy::ContinueAndInvest => "continue EMI and invest the surplus",
                Strategy::PrepayThenInvest => "prepay the loan, then invest",
            };
            println!(
                "\nVerdict: {} (ahead by {:.2}; net worth {:.2} vs {:.2})",
                name, verdict.advantage, verdict.net_worth_prepay, verdict.net_worth_continue
            );

            if let Some(label) = save {
                let id = save_result(&cli.store, &label, SavedResult::Comparison(comparison))?;
                println!("Saved as #{}", id);
            }
        }

        Command::Rates {
            amount,
            months,
            senior,
        } => {
            let runner = SweepRunner::with_sheet(sheet);
            let quotes = runner.quotes(amount, months, senior)?;

            println!(
                "Quotes for {:.2} over {} months{}:",
                amount,
                months,
                if senior { " (senior)" } else { "" }
            );
            println!("{:>4} {:<28} {:<14} {:>7} {:>14} {:>12}",
                "#", "Bank", "Category", "Rate", "Maturity", "Interest");
            println!("{}", "-".repeat(84));
            for (i, quote) in quotes.iter().enumerate() {
                println!(
                    "{:>4} {:<28} {:<14} {:>6.2}% {:>14.2} {:>12.2}",
                    i + 1,
                    quote.bank,
                    quote.category.as_str(),
                    quote.annual_rate_percent,
                    quote.maturity_value,
                    quote.interest_earned,
                );
            }
        }

        Command::Saved { delete } => {
            let mut store = CalculationStore::open(&cli.store)
                .map_err(|e| anyhow::anyhow!("failed to open store: {}", e))?;

            if let Some(id) = delete {
                if store
                    .delete(id)
                    .map_err(|e| anyhow::anyhow!("failed to delete: {}", e))?
                {
                    println!("Deleted #{}", id);
                } else {
                    println!("No entry #{}", id);
                }
            } else if store.entries().is_empty() {
                println!("No saved calculations");
            } else {
                for entry in store.entries() {
                    let kind = match &entry.result {
                        SavedResult::Emi { .. } => "emi",
                        SavedResult::Growth(_) => "growth",
                        SavedResult::Comparison(_) => "comparison",
                    };
                    println!(
                        "#{:<4} [{:<10}] {}  ({})",
                        entry.id,
                        kind,
                        entry.label,
                        entry.saved_at.format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }
    }

    Ok(())
}

fn save_result(path: &PathBuf, label: &str, result: SavedResult) -> anyhow::Result<u32> {
    let mut store =
        CalculationStore::open(path).map_err(|e| anyhow::anyhow!("failed to open store: {}", e))?;
    store
        .save(label, result)
        .map_err(|e| anyhow::anyhow!("failed to save: {}", e))
}

fn print_snapshots(snapshots: &[YearlySnapshot]) {
    println!(
        "{:>4} {:>6} {:>16} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "Year", "Month", "Phase", "Loan Bal", "Invested", "Value", "Int Credit", "Net Worth"
    );
    println!("{}", "-".repeat(104));
    for snap in snapshots {
        println!(
            "{:>4} {:>6} {:>16} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            snap.year,
            snap.months_elapsed,
            format!("{:?}", snap.phase),
            snap.loan_balance,
            snap.contributed_to_date,
            snap.investment_value,
            snap.interest_credited_this_year,
            snap.net_worth,
        );
    }
}
