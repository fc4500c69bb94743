//! Load loan batches from CSV
//!
//! Expected columns: `LoanID,PurchasePrice,DownPayment,InterestRate,TermYears`

use super::LoanParameters;
use crate::error::Result;
use csv::Reader;
use std::path::Path;

/// Default location of the loan batch file
pub const DEFAULT_LOANS_PATH: &str = "data/loans.csv";

/// Raw CSV row matching the loan batch columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "LoanID")]
    loan_id: String,
    #[serde(rename = "PurchasePrice")]
    purchase_price: f64,
    #[serde(rename = "DownPayment")]
    down_payment: f64,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
    #[serde(rename = "TermYears")]
    term_years: u32,
}

/// A loan read from a batch file, keyed by its identifier
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LabeledLoan {
    pub loan_id: String,
    pub loan: LoanParameters,
}

impl CsvRow {
    fn to_loan(self) -> Result<LabeledLoan> {
        let loan = LoanParameters::new(
            self.purchase_price,
            self.down_payment,
            self.interest_rate,
            self.term_years,
        )?;
        Ok(LabeledLoan { loan_id: self.loan_id, loan })
    }
}

/// Load all loans from a CSV file
pub fn load_loans<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledLoan>> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load loans from any reader (string buffer, stdin, ...)
pub fn load_loans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<LabeledLoan>> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<LabeledLoan>> {
    let mut loans = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        loans.push(row.to_loan()?);
    }

    log::debug!("Loaded {} loans", loans.len());
    Ok(loans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MortgageError;

    const BATCH: &str = "\
LoanID,PurchasePrice,DownPayment,InterestRate,TermYears
starter,350000,70000,6.5,30
short,350000,70000,5.75,15
";

    #[test]
    fn test_load_loans_from_reader() {
        let loans = load_loans_from_reader(BATCH.as_bytes()).expect("Failed to load loans");
        assert_eq!(loans.len(), 2);

        assert_eq!(loans[0].loan_id, "starter");
        assert_eq!(loans[0].loan.total_months().unwrap(), 360);
        assert_eq!(loans[1].loan.term_years, 15);
        assert!((loans[1].loan.principal() - 280_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_row_is_rejected() {
        let data = "LoanID,PurchasePrice,DownPayment,InterestRate,TermYears\nbad,100000,150000,6,30\n";
        let err = load_loans_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, MortgageError::InvalidInput { .. }));
    }

    #[test]
    fn test_malformed_row_is_csv_error() {
        let data = "LoanID,PurchasePrice,DownPayment,InterestRate,TermYears\nbad,abc,0,6,30\n";
        let err = load_loans_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, MortgageError::Csv(_)));
    }
}
