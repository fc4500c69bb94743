//! Scenario runner for batch loan comparisons
//!
//! Builds the engine once from the calculator assumptions, then generates
//! schedules for many loans or rate variations in parallel.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;

use crate::amortization::{AmortizationEngine, AmortizationSchedule, ScheduleConfig, ScheduleSummary};
use crate::assumptions::CalculatorAssumptions;
use crate::error::Result;
use crate::loan::{LabeledLoan, LoanParameters};

/// Summary of one loan's schedule, for side-by-side comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanComparison {
    pub loan_id: String,
    pub loan: LoanParameters,
    pub summary: ScheduleSummary,
}

/// Pre-configured runner for batch schedules
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
/// let loans = load_loans("data/loans.csv")?;
/// for row in runner.run_batch(&loans, start)? {
///     println!("{}: {:.2}", row.loan_id, row.summary.total_interest);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: AmortizationEngine,
}

impl ScenarioRunner {
    /// Runner with the standard assumptions
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner configured from the default assumptions file
    pub fn from_csv() -> Result<Self> {
        Ok(Self::with_assumptions(&CalculatorAssumptions::from_csv()?))
    }

    pub fn with_assumptions(assumptions: &CalculatorAssumptions) -> Self {
        Self {
            engine: AmortizationEngine::new(ScheduleConfig {
                final_period: assumptions.final_period,
            }),
        }
    }

    /// Full schedule for a single loan
    pub fn run(&self, loan: &LoanParameters, start_date: NaiveDate) -> Result<AmortizationSchedule> {
        self.engine.schedule_for(loan, start_date)
    }

    /// Summaries for every loan, in input order
    pub fn run_batch(&self, loans: &[LabeledLoan], start_date: NaiveDate) -> Result<Vec<LoanComparison>> {
        let results = loans
            .par_iter()
            .map(|labeled| {
                let schedule = self.engine.schedule_for(&labeled.loan, start_date)?;
                Ok(LoanComparison {
                    loan_id: labeled.loan_id.clone(),
                    loan: labeled.loan,
                    summary: schedule.summary(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        log::info!("Compared {} loans", results.len());
        Ok(results)
    }

    /// The same loan re-priced at each annual rate
    pub fn run_rates(
        &self,
        loan: &LoanParameters,
        annual_rates_percent: &[f64],
        start_date: NaiveDate,
    ) -> Result<Vec<LoanComparison>> {
        let variants = annual_rates_percent
            .iter()
            .map(|&rate| {
                let variant = LoanParameters {
                    annual_interest_rate_percent: rate,
                    ..*loan
                };
                variant.validate()?;
                Ok(LabeledLoan {
                    loan_id: format!("{}%", rate),
                    loan: variant,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        self.run_batch(&variants, start_date)
    }

    pub fn engine(&self) -> &AmortizationEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::load_loans_from_reader;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_batch_keeps_input_order() {
        let data = "LoanID,PurchasePrice,DownPayment,InterestRate,TermYears\n\
                    a,400000,80000,6.5,30\n\
                    b,400000,80000,6.5,15\n\
                    c,400000,80000,0,15\n";
        let loans = load_loans_from_reader(data.as_bytes()).unwrap();

        let results = ScenarioRunner::new().run_batch(&loans, start()).unwrap();
        let ids: Vec<_> = results.iter().map(|r| r.loan_id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);

        // Shorter term pays less interest; zero rate pays none
        assert!(results[1].summary.total_interest < results[0].summary.total_interest);
        assert_eq!(results[2].summary.total_interest, 0.0);
        assert_eq!(results[0].summary.total_months, 360);
    }

    #[test]
    fn test_rate_scenarios() {
        let runner = ScenarioRunner::new();
        let loan = LoanParameters::new(500_000.0, 100_000.0, 5.0, 30).unwrap();

        let results = runner.run_rates(&loan, &[4.0, 5.0, 6.0], start()).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].loan_id, "4%");

        // Higher rate should result in a higher payment
        assert!(results[2].summary.monthly_payment > results[1].summary.monthly_payment);
        assert!(results[1].summary.monthly_payment > results[0].summary.monthly_payment);
    }

    #[test]
    fn test_invalid_rate_scenario() {
        let loan = LoanParameters::new(500_000.0, 100_000.0, 5.0, 30).unwrap();
        assert!(ScenarioRunner::new().run_rates(&loan, &[5.0, 150.0], start()).is_err());
    }
}
