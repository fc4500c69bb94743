//! Central bank rate payloads, for the informational rate display

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::{FetchError, RateFetcher};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralBankRate {
    pub central_bank: String,
    pub country: String,
    pub rate_pct: f64,
    pub last_updated: String,
}

#[derive(Debug, Deserialize)]
struct RatePayload {
    central_bank_rates: Vec<CentralBankRate>,
}

/// Parse the `central_bank_rates` array out of a raw provider payload
pub fn parse_central_bank_rates(raw: &str) -> Result<Vec<CentralBankRate>, FetchError> {
    let payload: RatePayload =
        serde_json::from_str(raw).map_err(|e| FetchError::Malformed(e.to_string()))?;
    Ok(payload.central_bank_rates)
}

/// Fixed-width table of rates
pub fn format_rate_table(rates: &[CentralBankRate]) -> String {
    let mut table = String::new();
    let _ = writeln!(table, "{:<29} {:<18} {:<10} {:<12}", "Central Bank", "Country", "Rate(%)", "Last Updated");
    for rate in rates {
        let _ = writeln!(
            table,
            "{:<29} {:<18} {:<10.2} {:<12}",
            rate.central_bank, rate.country, rate.rate_pct, rate.last_updated
        );
    }
    table
}

/// Serves a fixed payload, for offline use
#[derive(Debug, Clone)]
pub struct FixedRates(pub String);

#[async_trait]
impl RateFetcher for FixedRates {
    async fn fetch_rates(&self) -> Result<String, FetchError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "central_bank_rates": [
            {"central_bank": "Federal Reserve", "country": "United States", "rate_pct": 4.5, "last_updated": "12-18-2024"},
            {"central_bank": "Bank of England", "country": "United Kingdom", "rate_pct": 4.75, "last_updated": "11-07-2024"}
        ],
        "non_central_bank_rates": []
    }"#;

    #[test]
    fn test_parse_rates() {
        let rates = parse_central_bank_rates(PAYLOAD).unwrap();
        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].central_bank, "Federal Reserve");
        assert_eq!(rates[1].rate_pct, 4.75);
    }

    #[test]
    fn test_malformed_payload() {
        assert!(matches!(parse_central_bank_rates("Error: 401"), Err(FetchError::Malformed(_))));
        assert!(parse_central_bank_rates(r#"{"rates": []}"#).is_err());
    }

    #[test]
    fn test_table_layout() {
        let rates = parse_central_bank_rates(PAYLOAD).unwrap();
        let table = format_rate_table(&rates);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Central Bank"));
        assert!(lines[1].starts_with("Federal Reserve"));
        assert!(lines[1].contains("4.50"));
        assert_eq!(&lines[1][30..43], "United States");
    }

    #[tokio::test]
    async fn test_fixed_rates_source() {
        let source = FixedRates(PAYLOAD.to_string());
        let raw = source.fetch_rates().await.unwrap();
        assert_eq!(parse_central_bank_rates(&raw).unwrap().len(), 2);
    }
}
