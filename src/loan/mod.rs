//! Loan parameters and batch loading

mod data;
pub mod loader;

pub use data::{
    monthly_rate_from_annual_percent, LoanParameters, MAX_ANNUAL_RATE_PERCENT, MAX_TERM_YEARS, MONTHS_PER_YEAR,
    TYPICAL_MAX_ANNUAL_RATE_PERCENT,
};
pub(crate) use data::{months_for_term, require_annual_rate_percent};
pub use loader::{load_loans, load_loans_from_reader, LabeledLoan, DEFAULT_LOANS_PATH};
