//! US ZIP code used to key tax and insurance lookups

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MortgageError, Result};

/// Five-digit ZIP code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZipCode(String);

impl ZipCode {
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.len() == 5 && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(ZipCode(value.to_string()))
        } else {
            Err(MortgageError::invalid("zip_code", format!("must be exactly 5 digits, got {:?}", value)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ZipCode {
    type Error = MortgageError;

    fn try_from(value: String) -> Result<Self> {
        ZipCode::parse(&value)
    }
}

impl From<ZipCode> for String {
    fn from(zip: ZipCode) -> Self {
        zip.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let zip = ZipCode::parse(" 02139 ").unwrap();
        assert_eq!(zip.as_str(), "02139");
        assert_eq!(zip.to_string(), "02139");
    }

    #[test]
    fn test_parse_invalid() {
        for bad in ["", "1234", "123456", "12a45", "１２３４５"] {
            assert!(ZipCode::parse(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_serde_validates() {
        let zip: ZipCode = serde_json::from_str("\"94105\"").unwrap();
        assert_eq!(zip.as_str(), "94105");
        assert!(serde_json::from_str::<ZipCode>("\"9410\"").is_err());
    }
}
