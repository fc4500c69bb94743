//! Mortgage calculator CLI
//!
//! Command-line interface for payments, schedules and affordability estimates

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

use mortgage_engine::affordability::AffordabilityInputs;
use mortgage_engine::export::{export_schedule, format_money, write_schedule_json, ScheduleTable};
use mortgage_engine::external::{
    estimate_home_insurance, format_rate_table, parse_central_bank_rates, EstimatedTaxAndInsurance,
    FixedTaxAndInsurance,
};
use mortgage_engine::{
    AffordabilityEstimator, AmortizationEngine, CalculatorAssumptions, CsvScheduleWriter, LoanParameters,
    MortgageQuoter, ScheduleConfig, TaxAndInsuranceFetcher, ZipCode,
};

#[derive(Parser)]
#[command(name = "mortgage", version, about = "Mortgage payment and affordability calculator")]
struct Cli {
    /// Directory holding calculator.csv (standard assumptions when omitted)
    #[arg(long, global = true)]
    assumptions: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fixed monthly principal and interest payment
    Payment {
        #[command(flatten)]
        loan: LoanArgs,
    },
    /// Full amortization schedule
    Schedule {
        #[command(flatten)]
        loan: LoanArgs,
        /// First payment date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Rows printed to the console
        #[arg(long, default_value_t = 12)]
        rows: usize,
        /// Write every row to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Write the schedule to this JSON file
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Debt-to-income ratio and maximum affordable price
    Afford {
        #[arg(long)]
        income: f64,
        /// Monthly expenses
        #[arg(long, default_value_t = 0.0)]
        expenses: f64,
        /// Other annual debt
        #[arg(long, default_value_t = 0.0)]
        debt: f64,
    },
    /// Largest loan (and price) an affordable monthly payment carries
    MaxLoan {
        #[arg(long)]
        payment: f64,
        /// Annual rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
        #[arg(long, default_value_t = 0.0)]
        down: f64,
    },
    /// Monthly total including property tax and home insurance
    Quote {
        #[command(flatten)]
        loan: LoanArgs,
        #[arg(long)]
        zip: String,
        /// Known monthly property tax
        #[arg(long)]
        property_tax: Option<f64>,
        /// Known monthly home insurance
        #[arg(long)]
        home_insurance: Option<f64>,
        /// Annual property tax rate (0.0125 = 1.25%), estimates both amounts
        #[arg(long, conflicts_with_all = ["property_tax", "home_insurance"])]
        tax_rate: Option<f64>,
    },
    /// Central bank rate table from a saved rate payload
    Rates {
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Args)]
struct LoanArgs {
    /// Purchase price
    #[arg(long)]
    price: f64,
    /// Down payment
    #[arg(long, default_value_t = 0.0)]
    down: f64,
    /// Annual interest rate in percent
    #[arg(long)]
    rate: f64,
    /// Term in years
    #[arg(long, default_value_t = 30)]
    years: u32,
}

impl LoanArgs {
    fn to_loan(&self) -> Result<LoanParameters> {
        let loan = LoanParameters::new(self.price, self.down, self.rate, self.years)?;
        if !loan.is_typical_rate() {
            log::warn!("Interest rate {}% is unusually high", loan.annual_interest_rate_percent);
        }
        Ok(loan)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let assumptions = match &cli.assumptions {
        Some(dir) => CalculatorAssumptions::from_csv_path(dir)
            .with_context(|| format!("Failed to load assumptions from {}", dir.display()))?,
        None => CalculatorAssumptions::standard(),
    };
    let engine = AmortizationEngine::new(ScheduleConfig {
        final_period: assumptions.final_period,
    });

    match cli.command {
        Command::Payment { loan } => {
            let loan = loan.to_loan()?;
            let payment = engine.monthly_payment(&loan)?;
            println!("Loan amount:     {}", format_money(loan.principal()));
            println!("Monthly payment: {}", format_money(payment));
        }
        Command::Schedule { loan, start, rows, csv, json } => {
            let loan = loan.to_loan()?;
            let start = start.unwrap_or_else(|| Local::now().date_naive());
            let schedule = engine.schedule_for(&loan, start)?;

            let mut table = ScheduleTable::new(Some(rows));
            export_schedule(&schedule, &mut table)?;
            print!("{}", table.as_str());

            let summary = schedule.summary();
            println!();
            println!("Total paid:     {}", format_money(summary.total_paid));
            println!("Total interest: {}", format_money(summary.total_interest));
            if let Some(payoff) = summary.payoff_date {
                println!("Payoff date:    {}", payoff);
            }

            if let Some(path) = csv {
                let mut writer = CsvScheduleWriter::create(&path)
                    .with_context(|| format!("Unable to create {}", path.display()))?;
                export_schedule(&schedule, &mut writer)?;
                println!("Schedule written to {}", path.display());
            }
            if let Some(path) = json {
                let file = File::create(&path).with_context(|| format!("Unable to create {}", path.display()))?;
                write_schedule_json(file, &schedule)?;
                println!("Schedule written to {}", path.display());
            }
        }
        Command::Afford { income, expenses, debt } => {
            let estimator = AffordabilityEstimator::new(assumptions.affordability_multiplier)?;
            let estimate = estimator.estimate(&AffordabilityInputs {
                annual_income: income,
                monthly_expenses: expenses,
                other_debt: debt,
            })?;
            println!("Annual debt:          {}", format_money(estimate.annual_debt));
            println!("Debt-to-income:       {:.2}%", estimate.dti_ratio_percent);
            println!(
                "Max affordable price: {} ({}x remaining income)",
                format_money(estimate.max_affordable_price),
                estimator.multiplier()
            );
        }
        Command::MaxLoan { payment, rate, years, down } => {
            let estimator = AffordabilityEstimator::new(assumptions.affordability_multiplier)?;
            let max_loan = estimator.max_loan_from_payment(payment, rate, years)?;
            let max_price = estimator.max_price_from_payment(payment, rate, years, down)?;
            println!("Max loan:  {}", format_money(max_loan));
            println!("Max price: {}", format_money(max_price));
        }
        Command::Quote { loan, zip, property_tax, home_insurance, tax_rate } => {
            let loan = loan.to_loan()?;
            let zip = ZipCode::parse(&zip)?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("Failed to start async runtime")?;

            match tax_rate {
                Some(annual_tax_rate) => {
                    let source = EstimatedTaxAndInsurance {
                        annual_tax_rate,
                        insurance_rate: assumptions.insurance_rate,
                        insured_value: loan.purchase_price,
                    };
                    runtime.block_on(print_quote(source, &assumptions, &loan, &zip))?;
                }
                None => {
                    let source = FixedTaxAndInsurance {
                        property_tax: property_tax.unwrap_or(assumptions.property_tax_fallback),
                        home_insurance: home_insurance.unwrap_or_else(|| {
                            estimate_home_insurance(loan.purchase_price, assumptions.insurance_rate)
                        }),
                    };
                    runtime.block_on(print_quote(source, &assumptions, &loan, &zip))?;
                }
            }
        }
        Command::Rates { file } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("Unable to read {}", file.display()))?;
            let rates = parse_central_bank_rates(&raw)?;
            print!("{}", format_rate_table(&rates));
        }
    }

    Ok(())
}

async fn print_quote<F: TaxAndInsuranceFetcher>(
    source: F,
    assumptions: &CalculatorAssumptions,
    loan: &LoanParameters,
    zip: &ZipCode,
) -> Result<()> {
    let quoter = MortgageQuoter::with_assumptions(source, assumptions);
    let quote = quoter.quote(loan, zip).await?;

    println!("Quote for ZIP {}", quote.zip_code);
    for slice in quote.breakdown.slices() {
        println!("  {:<24} {:>12} {:>6.1}%", slice.label, format_money(slice.amount), slice.share_percent);
    }
    println!("  {:<24} {:>12}", "Total", format_money(quote.total()));
    Ok(())
}
