//! Compare every loan in a CSV batch file
//!
//! Generates all schedules in parallel and writes one summary row per loan

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;

use mortgage_engine::loan::{load_loans, DEFAULT_LOANS_PATH};
use mortgage_engine::{CalculatorAssumptions, LoanComparison, ScenarioRunner};

#[derive(Parser)]
#[command(about = "Compare amortization summaries for a batch of loans")]
struct Cli {
    /// Loan batch (LoanID,PurchasePrice,DownPayment,InterestRate,TermYears)
    #[arg(long, default_value = DEFAULT_LOANS_PATH)]
    input: PathBuf,

    #[arg(long, default_value = "loan_comparison.csv")]
    output: PathBuf,

    /// First payment date for every loan
    #[arg(long, default_value = "2025-01-01")]
    start: NaiveDate,

    /// Directory holding calculator.csv
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

#[derive(Serialize)]
struct OutputRow<'a> {
    #[serde(rename = "LoanID")]
    loan_id: &'a str,
    #[serde(rename = "Principal")]
    principal: String,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
    #[serde(rename = "TermYears")]
    term_years: u32,
    #[serde(rename = "MonthlyPayment")]
    monthly_payment: String,
    #[serde(rename = "TotalPaid")]
    total_paid: String,
    #[serde(rename = "TotalInterest")]
    total_interest: String,
    #[serde(rename = "PayoffDate")]
    payoff_date: String,
}

impl<'a> From<&'a LoanComparison> for OutputRow<'a> {
    fn from(row: &'a LoanComparison) -> Self {
        OutputRow {
            loan_id: &row.loan_id,
            principal: format!("{:.2}", row.loan.principal()),
            interest_rate: row.loan.annual_interest_rate_percent,
            term_years: row.loan.term_years,
            monthly_payment: format!("{:.2}", row.summary.monthly_payment),
            total_paid: format!("{:.2}", row.summary.total_paid),
            total_interest: format!("{:.2}", row.summary.total_interest),
            payoff_date: row.summary.payoff_date.map(|d| d.to_string()).unwrap_or_default(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let assumptions = match &cli.assumptions {
        Some(dir) => CalculatorAssumptions::from_csv_path(dir)?,
        None => CalculatorAssumptions::standard(),
    };

    let start = Instant::now();
    println!("Loading loans from {}...", cli.input.display());
    let loans = load_loans(&cli.input).with_context(|| format!("Failed to load {}", cli.input.display()))?;
    println!("Loaded {} loans in {:?}", loans.len(), start.elapsed());

    let runner = ScenarioRunner::with_assumptions(&assumptions);
    let run_start = Instant::now();
    let results = runner.run_batch(&loans, cli.start)?;
    println!("Schedules complete in {:?}", run_start.elapsed());

    println!(
        "{:<16} {:>14} {:>8} {:>6} {:>12} {:>16}",
        "Loan", "Principal", "Rate", "Years", "Payment", "Total Interest"
    );
    println!("{}", "-".repeat(77));
    for row in &results {
        println!(
            "{:<16} {:>14.2} {:>8.3} {:>6} {:>12.2} {:>16.2}",
            row.loan_id,
            row.loan.principal(),
            row.loan.annual_interest_rate_percent,
            row.loan.term_years,
            row.summary.monthly_payment,
            row.summary.total_interest,
        );
    }

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    for row in &results {
        writer.serialize(OutputRow::from(row))?;
    }
    writer.flush()?;

    println!("Output written to {}", cli.output.display());
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
