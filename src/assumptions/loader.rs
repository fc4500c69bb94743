//! CSV-based assumption loader
//!
//! Reads `key,value` rows from data/assumptions/calculator.csv

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use crate::error::{MortgageError, Result};

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// File holding the calculator constants
pub const CALCULATOR_FILE: &str = "calculator.csv";

/// Load calculator constants from CSV
/// Returns HashMap<key, value>
pub fn load_calculator_constants(path: &Path) -> Result<HashMap<String, String>> {
    let file = File::open(path.join(CALCULATOR_FILE))?;
    load_constants_from_reader(file)
}

/// Load `key,value` constants from any reader
pub fn load_constants_from_reader<R: std::io::Read>(reader: R) -> Result<HashMap<String, String>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut constants = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let key = record
            .get(0)
            .ok_or_else(|| MortgageError::Config("row without a key".to_string()))?
            .trim()
            .to_string();
        let value = record
            .get(1)
            .ok_or_else(|| MortgageError::Config(format!("no value for {}", key)))?
            .trim()
            .to_string();
        constants.insert(key, value);
    }

    Ok(constants)
}
