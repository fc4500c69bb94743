//! Calculator assumptions: named constants with no derivation in the rate
//! formulas themselves (affordability multiplier, lookup fallbacks)

pub mod loader;

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::amortization::FinalPeriodPolicy;
use crate::error::{MortgageError, Result};

/// Income-to-price multiplier used by the affordability estimate
pub const DEFAULT_AFFORDABILITY_MULTIPLIER: f64 = 5.0;

/// Monthly property tax assumed when the tax lookup fails
pub const DEFAULT_PROPERTY_TAX_FALLBACK: f64 = 280.0;

/// Monthly home insurance assumed when the insurance lookup fails
pub const DEFAULT_HOME_INSURANCE_FALLBACK: f64 = 66.0;

/// Rate applied to price / 100 / 12 for the price-based insurance estimate
pub const DEFAULT_INSURANCE_RATE: f64 = 0.1;

/// Timeout applied to each external lookup
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5000;

/// Container for all calculator assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorAssumptions {
    pub affordability_multiplier: f64,
    pub property_tax_fallback: f64,
    pub home_insurance_fallback: f64,
    pub insurance_rate: f64,
    pub fetch_timeout_ms: u64,
    pub final_period: FinalPeriodPolicy,
}

impl CalculatorAssumptions {
    /// Assumptions matching the calculator's published behavior
    pub fn standard() -> Self {
        Self {
            affordability_multiplier: DEFAULT_AFFORDABILITY_MULTIPLIER,
            property_tax_fallback: DEFAULT_PROPERTY_TAX_FALLBACK,
            home_insurance_fallback: DEFAULT_HOME_INSURANCE_FALLBACK,
            insurance_rate: DEFAULT_INSURANCE_RATE,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            final_period: FinalPeriodPolicy::default(),
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let constants = loader::load_calculator_constants(path)?;
        Self::from_constants(&constants)
    }

    /// Overlay loaded `key -> value` constants on the standard assumptions.
    /// Missing keys keep their default; unknown keys are rejected.
    pub fn from_constants(constants: &HashMap<String, String>) -> Result<Self> {
        let mut assumptions = Self::standard();

        for (key, value) in constants {
            match key.as_str() {
                "affordability_multiplier" => {
                    let multiplier = parse_amount(key, value)?;
                    if multiplier == 0.0 {
                        return Err(MortgageError::Config(format!("{} must be greater than zero", key)));
                    }
                    assumptions.affordability_multiplier = multiplier;
                }
                "property_tax_fallback" => assumptions.property_tax_fallback = parse_amount(key, value)?,
                "home_insurance_fallback" => assumptions.home_insurance_fallback = parse_amount(key, value)?,
                "insurance_rate" => assumptions.insurance_rate = parse_amount(key, value)?,
                "fetch_timeout_ms" => {
                    assumptions.fetch_timeout_ms = value
                        .parse()
                        .map_err(|e| MortgageError::Config(format!("{}: {} ({})", key, value, e)))?
                }
                "final_period" => {
                    assumptions.final_period = match value.as_str() {
                        "ExactPayoff" => FinalPeriodPolicy::ExactPayoff,
                        "AllowDrift" => FinalPeriodPolicy::AllowDrift,
                        other => {
                            return Err(MortgageError::Config(format!("Unknown final_period: {}", other)))
                        }
                    }
                }
                other => return Err(MortgageError::Config(format!("Unknown assumption: {}", other))),
            }
        }

        Ok(assumptions)
    }

    /// Timeout for each external lookup
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

impl Default for CalculatorAssumptions {
    fn default() -> Self {
        Self::standard()
    }
}

fn parse_amount(key: &str, value: &str) -> Result<f64> {
    let amount: f64 = value
        .parse()
        .map_err(|e| MortgageError::Config(format!("{}: {} ({})", key, value, e)))?;
    if !(amount >= 0.0) {
        return Err(MortgageError::Config(format!("{} must not be negative, got {}", key, amount)));
    }
    Ok(amount)
}
