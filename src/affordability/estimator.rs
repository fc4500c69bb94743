//! Income-based and payment-based affordability estimates

use serde::{Deserialize, Serialize};

use crate::amortization::max_principal_for_payment;
use crate::assumptions::DEFAULT_AFFORDABILITY_MULTIPLIER;
use crate::error::{require_non_negative, require_positive, Result};
use crate::loan::{months_for_term, monthly_rate_from_annual_percent, require_annual_rate_percent, MONTHS_PER_YEAR};

/// Household finances feeding the affordability estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityInputs {
    /// Gross annual income
    pub annual_income: f64,

    /// Recurring monthly expenses
    pub monthly_expenses: f64,

    /// Outstanding credit card and other debt
    pub other_debt: f64,
}

impl AffordabilityInputs {
    /// Expenses annualized plus outstanding debt
    pub fn annual_debt(&self) -> f64 {
        self.monthly_expenses * MONTHS_PER_YEAR as f64 + self.other_debt
    }

    fn validate(&self) -> Result<()> {
        require_positive("annual_income", self.annual_income)?;
        require_non_negative("monthly_expenses", self.monthly_expenses)?;
        require_non_negative("other_debt", self.other_debt)?;
        Ok(())
    }
}

/// Result of the income-based estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityEstimate {
    pub annual_debt: f64,

    /// Debt-to-income ratio in percent; may exceed 100
    pub dti_ratio_percent: f64,

    /// Income left after debt; negative when debt exceeds income
    pub affordable_income: f64,

    pub max_affordable_price: f64,
}

/// Affordability calculator parameterized by the income multiplier
#[derive(Debug, Clone)]
pub struct AffordabilityEstimator {
    multiplier: f64,
}

impl AffordabilityEstimator {
    pub fn new(multiplier: f64) -> Result<Self> {
        require_positive("affordability_multiplier", multiplier)?;
        Ok(Self { multiplier })
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Estimate DTI and the maximum affordable price.
    ///
    /// `annual_debt = monthly_expenses * 12 + other_debt`,
    /// `max_affordable_price = (annual_income - annual_debt) * multiplier`.
    pub fn estimate(&self, inputs: &AffordabilityInputs) -> Result<AffordabilityEstimate> {
        inputs.validate()?;

        let annual_debt = inputs.annual_debt();
        let dti_ratio_percent = annual_debt / inputs.annual_income * 100.0;
        let affordable_income = inputs.annual_income - annual_debt;
        let max_affordable_price = affordable_income * self.multiplier;

        if dti_ratio_percent > 100.0 {
            log::debug!("Debt exceeds income: DTI {:.2}%", dti_ratio_percent);
        }

        Ok(AffordabilityEstimate {
            annual_debt,
            dti_ratio_percent,
            affordable_income,
            max_affordable_price,
        })
    }

    /// Largest loan an affordable monthly payment carries at the given rate and term
    pub fn max_loan_from_payment(
        &self,
        affordable_monthly_payment: f64,
        annual_rate_percent: f64,
        term_years: u32,
    ) -> Result<f64> {
        estimate_max_loan_from_payment(affordable_monthly_payment, annual_rate_percent, term_years)
    }

    /// Highest purchase price reachable with the payment plus a down payment
    pub fn max_price_from_payment(
        &self,
        affordable_monthly_payment: f64,
        annual_rate_percent: f64,
        term_years: u32,
        down_payment: f64,
    ) -> Result<f64> {
        require_non_negative("down_payment", down_payment)?;
        let max_loan = estimate_max_loan_from_payment(affordable_monthly_payment, annual_rate_percent, term_years)?;
        Ok(max_loan + down_payment)
    }
}

impl Default for AffordabilityEstimator {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_AFFORDABILITY_MULTIPLIER,
        }
    }
}

/// Estimate DTI and maximum affordable price with the standard multiplier
pub fn estimate_affordability(annual_income: f64, monthly_expenses: f64, other_debt: f64) -> Result<AffordabilityEstimate> {
    AffordabilityEstimator::default().estimate(&AffordabilityInputs {
        annual_income,
        monthly_expenses,
        other_debt,
    })
}

/// Inverse annuity: the loan amount a monthly payment fully amortizes
pub fn estimate_max_loan_from_payment(
    affordable_monthly_payment: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> Result<f64> {
    require_annual_rate_percent(annual_rate_percent)?;
    let total_months = months_for_term(term_years)?;

    let max_loan = max_principal_for_payment(
        affordable_monthly_payment,
        monthly_rate_from_annual_percent(annual_rate_percent),
        total_months,
    )?;
    log::debug!(
        "Max loan {:.2} for payment {:.2} at {}% over {} years",
        max_loan,
        affordable_monthly_payment,
        annual_rate_percent,
        term_years
    );
    Ok(max_loan)
}
