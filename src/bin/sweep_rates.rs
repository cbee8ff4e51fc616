//! Sweep fixed-deposit quotes across every bank and a ladder of tenures
//!
//! Outputs a bank x tenure grid of maturity values for comparison tables

use fincalc::scenario::{SweepRunner, TenureQuotes};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

/// Deposit amount quoted in the sweep
const SWEEP_AMOUNT: f64 = 100_000.0;

/// Tenure ladder in months
const TENURES: [u32; 8] = [3, 6, 12, 18, 24, 36, 60, 120];

fn main() {
    env_logger::init();

    let start = Instant::now();
    let runner = SweepRunner::new();
    println!(
        "Sweeping {} banks across {} tenures...",
        runner.sheet().banks.len(),
        TENURES.len()
    );

    // Quote each tenure in parallel
    let grid: Vec<TenureQuotes> = TENURES
        .par_iter()
        .map(|&months| TenureQuotes {
            months,
            quotes: runner
                .quotes(SWEEP_AMOUNT, months, false)
                .expect("sweep inputs are valid"),
        })
        .collect();

    println!("Sweep complete in {:?}", start.elapsed());

    // Write the full grid
    let output_path = "fd_rate_sweep.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(file, "Months,Bank,Category,Rate,Maturity,Interest").unwrap();
    for row in &grid {
        for quote in &row.quotes {
            writeln!(
                file,
                "{},{},{},{:.2},{:.2},{:.2}",
                row.months,
                quote.bank,
                quote.category.as_str(),
                quote.annual_rate_percent,
                quote.maturity_value,
                quote.interest_earned,
            )
            .unwrap();
        }
    }

    println!("Output written to {}", output_path);

    // Print the best quote per tenure
    println!("\nBest quotes for {:.0}:", SWEEP_AMOUNT);
    for row in &grid {
        if let Some(best) = row.quotes.first() {
            println!(
                "  {:>3} months: {:<28} {:>5.2}%  maturity {:>12.2}",
                row.months, best.bank, best.annual_rate_percent, best.maturity_value
            );
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
}
