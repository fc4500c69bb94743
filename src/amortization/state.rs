//! Running balance tracking while a schedule is generated

use chrono::{Months, NaiveDate};

use super::engine::FinalPeriodPolicy;
use super::schedule::Payment;

/// State of the loan between two payments
#[derive(Debug, Clone)]
pub struct ScheduleState {
    /// Number of the payment about to be made (1-indexed)
    pub payment_number: u32,

    /// Balance outstanding before the next payment
    pub balance: f64,

    /// Due date of the next payment
    pub payment_date: Option<NaiveDate>,
}

impl ScheduleState {
    /// Initialize state at loan origination
    pub fn new(principal: f64, start_date: NaiveDate) -> Self {
        Self {
            payment_number: 1,
            balance: principal,
            payment_date: Some(start_date),
        }
    }

    /// Advance to the next period after `principal_paid` has been applied
    pub fn advance_month(&mut self, principal_paid: f64) {
        self.payment_number += 1;
        self.balance -= principal_paid;
        // Each date is derived from the previous one, so day 31 clamps and stays clamped
        self.payment_date = self
            .payment_date
            .and_then(|date| date.checked_add_months(Months::new(1)));
    }
}

/// Lazily yields the payments of a schedule, one per period.
///
/// Deterministic for the same inputs; clone it to restart from the same point.
#[derive(Debug, Clone)]
pub struct PaymentIter {
    monthly_payment: f64,
    monthly_rate: f64,
    total_months: u32,
    final_period: FinalPeriodPolicy,
    state: ScheduleState,
}

impl PaymentIter {
    pub(crate) fn new(
        principal: f64,
        monthly_payment: f64,
        monthly_rate: f64,
        total_months: u32,
        start_date: NaiveDate,
        final_period: FinalPeriodPolicy,
    ) -> Self {
        Self {
            monthly_payment,
            monthly_rate,
            total_months,
            final_period,
            state: ScheduleState::new(principal, start_date),
        }
    }

    /// Level payment used for every period before the last
    pub fn monthly_payment(&self) -> f64 {
        self.monthly_payment
    }

    fn remaining(&self) -> usize {
        (self.total_months + 1).saturating_sub(self.state.payment_number) as usize
    }
}

impl Iterator for PaymentIter {
    type Item = Payment;

    fn next(&mut self) -> Option<Payment> {
        if self.state.payment_number > self.total_months {
            return None;
        }
        let payment_date = self.state.payment_date?;

        let opening_balance = self.state.balance;
        let interest_paid = opening_balance * self.monthly_rate;

        let is_final = self.state.payment_number == self.total_months;
        let (principal_paid, payment_amount, remaining_balance) =
            if is_final && self.final_period == FinalPeriodPolicy::ExactPayoff {
                // Clear whatever floating-point residue is left
                (opening_balance, opening_balance + interest_paid, 0.0)
            } else {
                let principal_paid = self.monthly_payment - interest_paid;
                (principal_paid, self.monthly_payment, opening_balance - principal_paid)
            };

        let payment = Payment {
            payment_number: self.state.payment_number,
            payment_date,
            payment_amount,
            principal_paid,
            interest_paid,
            remaining_balance,
        };

        self.state.advance_month(principal_paid);
        Some(payment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PaymentIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_advance_month_moves_date_and_balance() {
        let mut state = ScheduleState::new(1_000.0, date(2025, 1, 15));
        state.advance_month(100.0);

        assert_eq!(state.payment_number, 2);
        assert_eq!(state.balance, 900.0);
        assert_eq!(state.payment_date, Some(date(2025, 2, 15)));
    }

    #[test]
    fn test_month_end_clamps() {
        let mut state = ScheduleState::new(1_000.0, date(2024, 1, 31));
        state.advance_month(0.0);
        assert_eq!(state.payment_date, Some(date(2024, 2, 29)));
        state.advance_month(0.0);
        assert_eq!(state.payment_date, Some(date(2024, 3, 29)));
    }

    #[test]
    fn test_iterator_yields_each_period_once() {
        let iter = PaymentIter::new(1_200.0, 100.0, 0.0, 12, date(2025, 1, 1), FinalPeriodPolicy::ExactPayoff);
        let payments: Vec<_> = iter.collect();

        assert_eq!(payments.len(), 12);
        assert_eq!(payments[0].payment_number, 1);
        assert_eq!(payments[11].payment_number, 12);
        assert_eq!(payments[11].payment_date, date(2025, 12, 1));
        assert_eq!(payments[11].remaining_balance, 0.0);
    }

    #[test]
    fn test_len_counts_down() {
        let mut iter = PaymentIter::new(1_200.0, 100.0, 0.0, 12, date(2025, 1, 1), FinalPeriodPolicy::ExactPayoff);
        assert_eq!(iter.len(), 12);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 10);
        assert_eq!(iter.by_ref().count(), 10);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_iterator_is_restartable_by_clone() {
        let iter = PaymentIter::new(10_000.0, 856.07, 0.005, 12, date(2025, 6, 1), FinalPeriodPolicy::AllowDrift);
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
    }
}
