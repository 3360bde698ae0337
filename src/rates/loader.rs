//! CSV-based rate table loader
//!
//! Expects a header row `category,label,annual_rate` with rates as fractions.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;
use serde::Deserialize;

use super::table::{RateEntry, RateTable};
use crate::error::RateError;

/// Default path to the rate table
pub const DEFAULT_RATES_PATH: &str = "data/rates.csv";

/// Raw CSV row matching the rate table columns
#[derive(Debug, Deserialize)]
struct CsvRow {
    category: String,
    label: String,
    annual_rate: f64,
}

impl From<CsvRow> for RateEntry {
    fn from(row: CsvRow) -> Self {
        RateEntry::new(&row.category, &row.label, row.annual_rate)
    }
}

/// Load a rate table from any reader (e.g., string buffer)
pub fn load_rates_from_reader<R: Read>(reader: R) -> Result<RateTable, RateError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        entries.push(RateEntry::from(row));
    }

    RateTable::from_entries(entries)
}

/// Load a rate table from a CSV file
pub fn load_rates<P: AsRef<Path>>(path: P) -> Result<RateTable, RateError> {
    let path = path.as_ref();
    let table = load_rates_from_reader(File::open(path)?)?;
    info!("Loaded {} rate categories from {}", table.len(), path.display());
    Ok(table)
}

impl RateTable {
    /// Load the table from a specific CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self, RateError> {
        load_rates(path)
    }
}
