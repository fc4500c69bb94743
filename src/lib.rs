//! Mortgage Engine - payment, amortization and affordability calculations
//!
//! This library provides:
//! - Fixed monthly payment and full amortization schedules
//! - Debt-to-income and maximum affordable price estimates
//! - Monthly payment breakdowns including property tax and home insurance
//! - Async contracts for rate, tax and insurance lookups, with fallbacks
//! - Batch loan comparison and schedule export

pub mod error;
pub mod loan;
pub mod assumptions;
pub mod amortization;
pub mod affordability;
pub mod summary;
pub mod external;
pub mod quote;
pub mod scenario;
pub mod export;

// Re-export commonly used types
pub use error::{MortgageError, Result};
pub use loan::{LabeledLoan, LoanParameters};
pub use assumptions::CalculatorAssumptions;
pub use amortization::{AmortizationEngine, AmortizationSchedule, FinalPeriodPolicy, Payment, ScheduleConfig};
pub use affordability::{estimate_affordability, estimate_max_loan_from_payment, AffordabilityEstimate, AffordabilityEstimator};
pub use summary::{combine, PaymentBreakdown};
pub use external::{FallbackFetcher, FetchError, RateFetcher, TaxAndInsuranceFetcher, ZipCode};
pub use quote::{MortgageQuote, MortgageQuoter};
pub use scenario::{LoanComparison, ScenarioRunner};
pub use export::{CsvScheduleWriter, ScheduleConsumer};
