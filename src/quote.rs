//! Full monthly quote: principal & interest plus looked-up tax and insurance

use serde::Serialize;

use crate::amortization::{AmortizationEngine, ScheduleConfig};
use crate::assumptions::CalculatorAssumptions;
use crate::error::Result;
use crate::external::{FallbackFetcher, TaxAndInsuranceFetcher, ZipCode};
use crate::loan::LoanParameters;
use crate::summary::{combine, PaymentBreakdown};

/// Quote for one loan in one ZIP code
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MortgageQuote {
    pub zip_code: ZipCode,
    pub loan: LoanParameters,
    pub breakdown: PaymentBreakdown,
}

impl MortgageQuote {
    /// Fixed principal and interest portion
    pub fn monthly_payment(&self) -> f64 {
        self.breakdown.principal_and_interest
    }

    pub fn total(&self) -> f64 {
        self.breakdown.total
    }
}

/// Compute the P&I payment and fetch tax and insurance concurrently.
///
/// The fetcher never fails; lookups that do are already replaced by the
/// fallback amounts.
pub async fn quote<F: TaxAndInsuranceFetcher>(
    engine: &AmortizationEngine,
    fetcher: &FallbackFetcher<F>,
    loan: &LoanParameters,
    zip_code: &ZipCode,
) -> Result<MortgageQuote> {
    let monthly_payment = engine.monthly_payment(loan)?;

    let (property_tax, home_insurance) = tokio::join!(
        fetcher.property_tax(zip_code, loan.purchase_price),
        fetcher.home_insurance(zip_code),
    );

    let breakdown = combine(monthly_payment, property_tax, home_insurance)?;
    log::debug!("Quote for {}: {:.2} total per month", zip_code, breakdown.total);

    Ok(MortgageQuote {
        zip_code: zip_code.clone(),
        loan: *loan,
        breakdown,
    })
}

/// Engine and fetcher configured once, reused across quotes
#[derive(Debug, Clone)]
pub struct MortgageQuoter<F> {
    engine: AmortizationEngine,
    fetcher: FallbackFetcher<F>,
}

impl<F: TaxAndInsuranceFetcher> MortgageQuoter<F> {
    pub fn new(engine: AmortizationEngine, fetcher: FallbackFetcher<F>) -> Self {
        Self { engine, fetcher }
    }

    pub fn with_assumptions(source: F, assumptions: &CalculatorAssumptions) -> Self {
        let engine = AmortizationEngine::new(ScheduleConfig {
            final_period: assumptions.final_period,
        });
        Self::new(engine, FallbackFetcher::from_assumptions(source, assumptions))
    }

    pub async fn quote(&self, loan: &LoanParameters, zip_code: &ZipCode) -> Result<MortgageQuote> {
        quote(&self.engine, &self.fetcher, loan, zip_code).await
    }

    pub fn engine(&self) -> &AmortizationEngine {
        &self.engine
    }
}
