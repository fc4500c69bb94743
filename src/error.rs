//! Error types shared across the calculation engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MortgageError {
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Payment date out of range: {months} months after {start}")]
    DateOutOfRange { start: chrono::NaiveDate, months: u32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MortgageError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        MortgageError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MortgageError>;

/// Require a strictly positive, non-NaN value
pub(crate) fn require_positive(field: &str, value: f64) -> Result<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(MortgageError::invalid(field, format!("must be greater than zero, got {}", value)))
    }
}

/// Require a non-negative, non-NaN value
pub(crate) fn require_non_negative(field: &str, value: f64) -> Result<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(MortgageError::invalid(field, format!("must not be negative, got {}", value)))
    }
}
