//! Offline tax and insurance sources

use async_trait::async_trait;

use super::{FetchError, TaxAndInsuranceFetcher, ZipCode};

/// Price-based monthly insurance estimate: `price / 100 / 12 * insurance_rate`
pub fn estimate_home_insurance(purchase_price: f64, insurance_rate: f64) -> f64 {
    purchase_price / 100.0 / 12.0 * insurance_rate
}

/// Monthly property tax from an annual tax rate (0.0125 = 1.25% of price per year)
pub fn monthly_property_tax(purchase_price: f64, annual_tax_rate: f64) -> f64 {
    purchase_price * annual_tax_rate / 12.0
}

/// Returns the same known amounts for every ZIP code
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTaxAndInsurance {
    pub property_tax: f64,
    pub home_insurance: f64,
}

#[async_trait]
impl TaxAndInsuranceFetcher for FixedTaxAndInsurance {
    async fn fetch_property_tax(&self, _zip_code: &ZipCode, _purchase_price: f64) -> Result<f64, FetchError> {
        Ok(self.property_tax)
    }

    async fn fetch_home_insurance(&self, _zip_code: &ZipCode) -> Result<f64, FetchError> {
        Ok(self.home_insurance)
    }
}

/// Rate-based estimates for a single home, independent of ZIP code
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedTaxAndInsurance {
    /// Annual property tax as a fraction of the price
    pub annual_tax_rate: f64,
    /// Rate for [`estimate_home_insurance`]
    pub insurance_rate: f64,
    /// Value the insurance estimate is based on
    pub insured_value: f64,
}

#[async_trait]
impl TaxAndInsuranceFetcher for EstimatedTaxAndInsurance {
    async fn fetch_property_tax(&self, _zip_code: &ZipCode, purchase_price: f64) -> Result<f64, FetchError> {
        Ok(monthly_property_tax(purchase_price, self.annual_tax_rate))
    }

    async fn fetch_home_insurance(&self, _zip_code: &ZipCode) -> Result<f64, FetchError> {
        Ok(estimate_home_insurance(self.insured_value, self.insurance_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_insurance_estimate() {
        // 480,000 home at the standard 0.1 rate
        assert_relative_eq!(estimate_home_insurance(480_000.0, 0.1), 40.0);
    }

    #[test]
    fn test_property_tax_from_rate() {
        assert_relative_eq!(monthly_property_tax(360_000.0, 0.01), 300.0);
    }

    #[tokio::test]
    async fn test_estimated_source() {
        let zip = ZipCode::parse("73301").unwrap();
        let source = EstimatedTaxAndInsurance {
            annual_tax_rate: 0.02,
            insurance_rate: 0.1,
            insured_value: 600_000.0,
        };

        let tax = source.fetch_property_tax(&zip, 600_000.0).await.unwrap();
        let insurance = source.fetch_home_insurance(&zip).await.unwrap();
        assert_relative_eq!(tax, 1_000.0);
        assert_relative_eq!(insurance, 50.0);
    }
}
