//! Contracts for the external lookups around the calculator
//!
//! The calculation core never performs I/O. Rate, property-tax and
//! home-insurance data come from implementations of the traits below; the
//! [`FallbackFetcher`] adaptor owns timeout and default-value policy.

mod estimates;
mod fallback;
mod rates;
mod zip;

pub use estimates::{estimate_home_insurance, monthly_property_tax, EstimatedTaxAndInsurance, FixedTaxAndInsurance};
pub use fallback::FallbackFetcher;
pub use rates::{format_rate_table, parse_central_bank_rates, CentralBankRate, FixedRates};
pub use zip::ZipCode;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Failure of an external lookup
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("Data unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Source of current market interest rates, shown for information only
#[async_trait]
pub trait RateFetcher: Send + Sync {
    /// Raw rate payload as returned by the provider
    async fn fetch_rates(&self) -> Result<String, FetchError>;
}

/// Source of monthly property tax and home insurance amounts
#[async_trait]
pub trait TaxAndInsuranceFetcher: Send + Sync {
    /// Monthly property tax for a home of `purchase_price` in `zip_code`
    async fn fetch_property_tax(&self, zip_code: &ZipCode, purchase_price: f64) -> Result<f64, FetchError>;

    /// Monthly home insurance premium in `zip_code`
    async fn fetch_home_insurance(&self, zip_code: &ZipCode) -> Result<f64, FetchError>;
}
