//! Core amortization engine for fixed-rate monthly schedules

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::annuity::compute_monthly_payment;
use super::schedule::AmortizationSchedule;
use super::state::PaymentIter;
use crate::error::{require_positive, MortgageError, Result};
use crate::loan::{months_for_term, monthly_rate_from_annual_percent, require_annual_rate_percent, LoanParameters};

/// How the last scheduled payment treats floating-point residue in the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FinalPeriodPolicy {
    /// Last payment retires the exact remaining balance; its amount may differ
    /// from the level payment by a fraction of a cent
    #[default]
    ExactPayoff,
    /// Every payment equals the level payment; the final balance keeps any drift
    AllowDrift,
}

/// Configuration for schedule generation
#[derive(Debug, Clone, Default)]
pub struct ScheduleConfig {
    /// Final period handling
    pub final_period: FinalPeriodPolicy,
}

/// Main amortization engine
#[derive(Debug, Clone, Default)]
pub struct AmortizationEngine {
    config: ScheduleConfig,
}

impl AmortizationEngine {
    /// Create a new engine with the given config
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// Fixed monthly payment from principal, periodic rate and number of payments
    pub fn compute_monthly_payment(&self, principal: f64, monthly_rate: f64, total_months: u32) -> Result<f64> {
        compute_monthly_payment(principal, monthly_rate, total_months)
    }

    /// Fixed monthly principal and interest payment for a loan
    pub fn monthly_payment(&self, loan: &LoanParameters) -> Result<f64> {
        let payment = compute_monthly_payment(loan.principal(), loan.monthly_rate(), loan.total_months()?)?;
        log::debug!(
            "Monthly payment {:.2} for principal {:.2} at {}% over {} years",
            payment,
            loan.principal(),
            loan.annual_interest_rate_percent,
            loan.term_years
        );
        Ok(payment)
    }

    /// Lazily iterate over the payments of a schedule
    pub fn payments(
        &self,
        principal: f64,
        annual_rate_percent: f64,
        term_years: u32,
        start_date: NaiveDate,
    ) -> Result<PaymentIter> {
        require_positive("principal", principal)?;
        require_annual_rate_percent(annual_rate_percent)?;
        let total_months = months_for_term(term_years)?;

        // The last due date must be representable before anything is emitted
        if start_date.checked_add_months(Months::new(total_months - 1)).is_none() {
            return Err(MortgageError::DateOutOfRange {
                start: start_date,
                months: total_months,
            });
        }

        let monthly_rate = monthly_rate_from_annual_percent(annual_rate_percent);
        let monthly_payment = compute_monthly_payment(principal, monthly_rate, total_months)?;

        Ok(PaymentIter::new(
            principal,
            monthly_payment,
            monthly_rate,
            total_months,
            start_date,
            self.config.final_period,
        ))
    }

    /// Generate the full schedule: exactly `term_years * 12` payments starting at `start_date`
    pub fn generate_schedule(
        &self,
        principal: f64,
        annual_rate_percent: f64,
        term_years: u32,
        start_date: NaiveDate,
    ) -> Result<AmortizationSchedule> {
        let iter = self.payments(principal, annual_rate_percent, term_years, start_date)?;
        let monthly_payment = iter.monthly_payment();

        let payments: Vec<_> = iter.collect();
        log::debug!(
            "Generated {} payments for principal {:.2}, final balance {:.6}",
            payments.len(),
            principal,
            payments.last().map(|p| p.remaining_balance).unwrap_or(principal)
        );

        Ok(AmortizationSchedule {
            principal,
            annual_rate_percent,
            term_years,
            monthly_payment,
            payments,
        })
    }

    /// Generate the schedule for validated loan parameters
    pub fn schedule_for(&self, loan: &LoanParameters, start_date: NaiveDate) -> Result<AmortizationSchedule> {
        self.generate_schedule(
            loan.principal(),
            loan.annual_interest_rate_percent,
            loan.term_years,
            start_date,
        )
    }
}
