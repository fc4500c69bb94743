//! Total monthly payment: principal & interest plus property tax and home insurance

use serde::{Deserialize, Serialize};

use crate::error::{require_non_negative, Result};

pub const PRINCIPAL_AND_INTEREST_LABEL: &str = "Principal & Interest";
pub const PROPERTY_TAX_LABEL: &str = "Property Tax";
pub const HOME_INSURANCE_LABEL: &str = "Homeowner's Insurance";

/// Monthly payment split into its components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub principal_and_interest: f64,
    pub property_tax: f64,
    pub home_insurance: f64,
    pub total: f64,
}

/// One labeled component of the breakdown, e.g. a pie-chart slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownSlice {
    pub label: &'static str,
    pub amount: f64,
    /// Share of the total, in percent
    pub share_percent: f64,
}

impl PaymentBreakdown {
    /// Components in display order with their share of the total
    pub fn slices(&self) -> Vec<BreakdownSlice> {
        [
            (PRINCIPAL_AND_INTEREST_LABEL, self.principal_and_interest),
            (PROPERTY_TAX_LABEL, self.property_tax),
            (HOME_INSURANCE_LABEL, self.home_insurance),
        ]
        .into_iter()
        .map(|(label, amount)| BreakdownSlice {
            label,
            amount,
            share_percent: if self.total > 0.0 { amount / self.total * 100.0 } else { 0.0 },
        })
        .collect()
    }

    /// Tax and insurance only
    pub fn escrow(&self) -> f64 {
        self.property_tax + self.home_insurance
    }
}

/// Combine monthly P&I with externally supplied tax and insurance amounts
pub fn combine(principal_and_interest: f64, property_tax: f64, home_insurance: f64) -> Result<PaymentBreakdown> {
    require_non_negative("principal_and_interest", principal_and_interest)?;
    require_non_negative("property_tax", property_tax)?;
    require_non_negative("home_insurance", home_insurance)?;

    Ok(PaymentBreakdown {
        principal_and_interest,
        property_tax,
        home_insurance,
        total: principal_and_interest + property_tax + home_insurance,
    })
}
