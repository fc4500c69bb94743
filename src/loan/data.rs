//! Loan parameter structures

use serde::{Deserialize, Serialize};

use crate::error::{require_non_negative, require_positive, MortgageError, Result};

/// Highest annual rate the calculator accepts, in percent
pub const MAX_ANNUAL_RATE_PERCENT: f64 = 100.0;

/// Highest annual rate considered typical for a residential mortgage, in percent
pub const TYPICAL_MAX_ANNUAL_RATE_PERCENT: f64 = 20.0;

/// Months per loan year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Longest term the calculator accepts, in years
pub const MAX_TERM_YEARS: u32 = 100;

/// Inputs describing a fixed-rate mortgage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Purchase price of the home
    pub purchase_price: f64,

    /// Amount paid upfront
    pub down_payment: f64,

    /// Annual interest rate as a percentage (6.0 = 6%)
    pub annual_interest_rate_percent: f64,

    /// Loan term in whole years
    pub term_years: u32,
}

impl LoanParameters {
    /// Build validated loan parameters
    pub fn new(
        purchase_price: f64,
        down_payment: f64,
        annual_interest_rate_percent: f64,
        term_years: u32,
    ) -> Result<Self> {
        let loan = Self {
            purchase_price,
            down_payment,
            annual_interest_rate_percent,
            term_years,
        };
        loan.validate()?;
        Ok(loan)
    }

    /// Check the field bounds. Deserialized loans skip `new`, so loaders call this.
    pub fn validate(&self) -> Result<()> {
        require_positive("purchase_price", self.purchase_price)?;
        require_non_negative("down_payment", self.down_payment)?;
        if self.down_payment >= self.purchase_price {
            return Err(MortgageError::invalid(
                "down_payment",
                format!(
                    "must be less than the purchase price ({} >= {})",
                    self.down_payment, self.purchase_price
                ),
            ));
        }
        require_annual_rate_percent(self.annual_interest_rate_percent)?;
        months_for_term(self.term_years)?;
        Ok(())
    }

    /// Amount borrowed
    pub fn principal(&self) -> f64 {
        self.purchase_price - self.down_payment
    }

    /// Periodic (monthly) rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        monthly_rate_from_annual_percent(self.annual_interest_rate_percent)
    }

    /// Number of monthly payments
    pub fn total_months(&self) -> Result<u32> {
        months_for_term(self.term_years)
    }

    /// Down payment as a share of the purchase price, in percent
    pub fn down_payment_percent(&self) -> f64 {
        self.down_payment / self.purchase_price * 100.0
    }

    /// Loan-to-value ratio, in percent
    pub fn loan_to_value_percent(&self) -> f64 {
        self.principal() / self.purchase_price * 100.0
    }

    /// Whether the rate falls within the range residential lenders usually quote
    pub fn is_typical_rate(&self) -> bool {
        self.annual_interest_rate_percent <= TYPICAL_MAX_ANNUAL_RATE_PERCENT
    }
}

/// Convert an annual percentage (6.0) into a monthly decimal rate (0.005)
pub fn monthly_rate_from_annual_percent(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / MONTHS_PER_YEAR as f64
}

/// Annual rate in percent, between 0 and [`MAX_ANNUAL_RATE_PERCENT`]
pub(crate) fn require_annual_rate_percent(annual_rate_percent: f64) -> Result<f64> {
    require_non_negative("annual_interest_rate_percent", annual_rate_percent)?;
    if annual_rate_percent > MAX_ANNUAL_RATE_PERCENT {
        return Err(MortgageError::invalid(
            "annual_interest_rate_percent",
            format!("must not exceed {}, got {}", MAX_ANNUAL_RATE_PERCENT, annual_rate_percent),
        ));
    }
    Ok(annual_rate_percent)
}

/// Payment count for a term of 1 to [`MAX_TERM_YEARS`] years
pub(crate) fn months_for_term(term_years: u32) -> Result<u32> {
    if term_years == 0 {
        return Err(MortgageError::invalid("term_years", "must be at least one year"));
    }
    if term_years > MAX_TERM_YEARS {
        return Err(MortgageError::invalid(
            "term_years",
            format!("must not exceed {} years, got {}", MAX_TERM_YEARS, term_years),
        ));
    }
    Ok(term_years * MONTHS_PER_YEAR)
}
