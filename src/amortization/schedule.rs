//! Schedule output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single scheduled payment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Sequence index (1-indexed)
    pub payment_number: u32,

    /// Date the payment falls due
    pub payment_date: NaiveDate,

    /// Total amount paid this period (principal + interest)
    pub payment_amount: f64,

    /// Portion applied to principal
    pub principal_paid: f64,

    /// Portion covering interest accrued on the opening balance
    pub interest_paid: f64,

    /// Balance outstanding after this payment
    pub remaining_balance: f64,
}

/// Complete amortization schedule for one loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Amount borrowed
    pub principal: f64,

    /// Annual interest rate as a percentage
    pub annual_rate_percent: f64,

    /// Loan term in years
    pub term_years: u32,

    /// Fixed monthly principal and interest payment
    pub monthly_payment: f64,

    /// Per-period rows in payment order
    pub payments: Vec<Payment>,
}

impl AmortizationSchedule {
    /// Number of scheduled payments
    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    /// (payment number, principal paid) pairs for charting
    pub fn principal_series(&self) -> Vec<(u32, f64)> {
        self.payments.iter().map(|p| (p.payment_number, p.principal_paid)).collect()
    }

    /// (payment number, interest paid) pairs for charting
    pub fn interest_series(&self) -> Vec<(u32, f64)> {
        self.payments.iter().map(|p| (p.payment_number, p.interest_paid)).collect()
    }

    /// Payments falling due within the given (1-indexed) loan year
    pub fn year(&self, loan_year: u32) -> &[Payment] {
        if loan_year == 0 {
            return &[];
        }
        let start = ((loan_year - 1) * 12) as usize;
        let end = (start + 12).min(self.payments.len());
        if start >= end {
            return &[];
        }
        &self.payments[start..end]
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        let total_paid: f64 = self.payments.iter().map(|p| p.payment_amount).sum();
        let total_principal: f64 = self.payments.iter().map(|p| p.principal_paid).sum();
        let total_interest: f64 = self.payments.iter().map(|p| p.interest_paid).sum();

        let final_balance = self.payments.last().map(|p| p.remaining_balance).unwrap_or(self.principal);
        let payoff_date = self.payments.last().map(|p| p.payment_date);

        ScheduleSummary {
            total_months: self.payments.len() as u32,
            monthly_payment: self.monthly_payment,
            total_paid,
            total_principal,
            total_interest,
            final_balance,
            payoff_date,
        }
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_months: u32,
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_principal: f64,
    pub total_interest: f64,
    pub final_balance: f64,
    pub payoff_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(n: u32, principal: f64, interest: f64, balance: f64) -> Payment {
        Payment {
            payment_number: n,
            payment_date: NaiveDate::from_ymd_opt(2025, n, 1).unwrap(),
            payment_amount: principal + interest,
            principal_paid: principal,
            interest_paid: interest,
            remaining_balance: balance,
        }
    }

    fn sample() -> AmortizationSchedule {
        AmortizationSchedule {
            principal: 300.0,
            annual_rate_percent: 12.0,
            term_years: 1,
            monthly_payment: 103.0,
            payments: vec![row(1, 100.0, 3.0, 200.0), row(2, 101.0, 2.0, 99.0), row(3, 99.0, 1.0, 0.0)],
        }
    }

    #[test]
    fn test_summary_totals() {
        let summary = sample().summary();
        assert_eq!(summary.total_months, 3);
        assert_eq!(summary.total_principal, 300.0);
        assert_eq!(summary.total_interest, 6.0);
        assert_eq!(summary.total_paid, 306.0);
        assert_eq!(summary.final_balance, 0.0);
        assert_eq!(summary.payoff_date, NaiveDate::from_ymd_opt(2025, 3, 1));
    }

    #[test]
    fn test_chart_series() {
        let schedule = sample();
        assert_eq!(schedule.principal_series()[1], (2, 101.0));
        assert_eq!(schedule.interest_series()[2], (3, 1.0));
    }

    #[test]
    fn test_year_slices() {
        let schedule = sample();
        assert_eq!(schedule.year(1).len(), 3);
        assert!(schedule.year(2).is_empty());
    }
}
