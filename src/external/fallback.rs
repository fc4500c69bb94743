//! Timeout and default-value policy for tax and insurance lookups

use std::time::Duration;

use super::{FetchError, TaxAndInsuranceFetcher, ZipCode};
use crate::assumptions::CalculatorAssumptions;

/// Wraps a lookup so callers always receive a usable monthly amount.
///
/// Each lookup gets one attempt bounded by `timeout`. Errors, timeouts and
/// negative or non-finite values are logged and replaced by the configured
/// fallback.
#[derive(Debug, Clone)]
pub struct FallbackFetcher<F> {
    inner: F,
    property_tax_fallback: f64,
    home_insurance_fallback: f64,
    timeout: Duration,
}

impl<F: TaxAndInsuranceFetcher> FallbackFetcher<F> {
    pub fn new(inner: F, property_tax_fallback: f64, home_insurance_fallback: f64, timeout: Duration) -> Self {
        Self {
            inner,
            property_tax_fallback,
            home_insurance_fallback,
            timeout,
        }
    }

    /// Fallbacks and timeout taken from the calculator assumptions
    pub fn from_assumptions(inner: F, assumptions: &CalculatorAssumptions) -> Self {
        Self::new(
            inner,
            assumptions.property_tax_fallback,
            assumptions.home_insurance_fallback,
            assumptions.fetch_timeout(),
        )
    }

    /// Monthly property tax, or the fallback when the lookup fails
    pub async fn property_tax(&self, zip_code: &ZipCode, purchase_price: f64) -> f64 {
        let result = self.bounded(self.inner.fetch_property_tax(zip_code, purchase_price)).await;
        self.resolve("property tax", zip_code, result, self.property_tax_fallback)
    }

    /// Monthly home insurance, or the fallback when the lookup fails
    pub async fn home_insurance(&self, zip_code: &ZipCode) -> f64 {
        let result = self.bounded(self.inner.fetch_home_insurance(zip_code)).await;
        self.resolve("home insurance", zip_code, result, self.home_insurance_fallback)
    }

    async fn bounded<Fut>(&self, lookup: Fut) -> Result<f64, FetchError>
    where
        Fut: std::future::Future<Output = Result<f64, FetchError>>,
    {
        match tokio::time::timeout(self.timeout, lookup).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.timeout)),
        }
    }

    fn resolve(&self, what: &str, zip_code: &ZipCode, result: Result<f64, FetchError>, fallback: f64) -> f64 {
        match result {
            Ok(amount) if amount.is_finite() && amount >= 0.0 => amount,
            Ok(amount) => {
                log::warn!("Discarding {} of {} for {}, using {:.2}", what, amount, zip_code, fallback);
                fallback
            }
            Err(e) => {
                log::warn!("{} lookup failed for {}: {}; using {:.2}", what, zip_code, e, fallback);
                fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::FixedTaxAndInsurance;
    use async_trait::async_trait;

    struct Unavailable;

    #[async_trait]
    impl TaxAndInsuranceFetcher for Unavailable {
        async fn fetch_property_tax(&self, _zip: &ZipCode, _price: f64) -> Result<f64, FetchError> {
            Err(FetchError::Unavailable("HTTP 503".to_string()))
        }

        async fn fetch_home_insurance(&self, _zip: &ZipCode) -> Result<f64, FetchError> {
            Err(FetchError::Malformed("missing home_insurance_rate".to_string()))
        }
    }

    struct Slow;

    #[async_trait]
    impl TaxAndInsuranceFetcher for Slow {
        async fn fetch_property_tax(&self, _zip: &ZipCode, _price: f64) -> Result<f64, FetchError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(1.0)
        }

        async fn fetch_home_insurance(&self, _zip: &ZipCode) -> Result<f64, FetchError> {
            Ok(f64::NAN)
        }
    }

    fn zip() -> ZipCode {
        ZipCode::parse("10001").unwrap()
    }

    #[tokio::test]
    async fn test_passes_through_successful_lookups() {
        let fetcher = FallbackFetcher::from_assumptions(
            FixedTaxAndInsurance { property_tax: 200.0, home_insurance: 150.0 },
            &CalculatorAssumptions::standard(),
        );
        assert_eq!(fetcher.property_tax(&zip(), 500_000.0).await, 200.0);
        assert_eq!(fetcher.home_insurance(&zip()).await, 150.0);
    }

    #[tokio::test]
    async fn test_errors_use_configured_fallbacks() {
        let fetcher = FallbackFetcher::from_assumptions(Unavailable, &CalculatorAssumptions::standard());
        assert_eq!(fetcher.property_tax(&zip(), 500_000.0).await, 280.0);
        assert_eq!(fetcher.home_insurance(&zip()).await, 66.0);
    }

    #[tokio::test]
    async fn test_timeout_and_bad_values_fall_back() {
        let fetcher = FallbackFetcher::new(Slow, 0.0, 66.0, Duration::from_millis(20));
        assert_eq!(fetcher.property_tax(&zip(), 500_000.0).await, 0.0);
        assert_eq!(fetcher.home_insurance(&zip()).await, 66.0);
    }
}
