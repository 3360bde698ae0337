//! Estimated annual returns by investment category

use serde::{Deserialize, Serialize};

use crate::error::RateError;

/// Category key whose rate is supplied by the caller at resolve time
pub const CUSTOM_CATEGORY: &str = "custom";

/// One static row of the rate table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    /// Lookup key (lowercase, unique)
    pub category: String,

    /// Human-readable name used in narratives
    pub label: String,

    /// Estimated nominal annual rate as a fraction (0.08 = 8%)
    pub annual_rate: f64,
}

impl RateEntry {
    pub fn new(category: &str, label: &str, annual_rate: f64) -> Self {
        Self {
            category: category.to_lowercase(),
            label: label.to_string(),
            annual_rate,
        }
    }
}

/// Which rate a calculation should use: a table category, or the custom slot
/// carrying its own rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RateChoice {
    Category(String),
    Custom(f64),
}

impl RateChoice {
    /// Build a choice from a category label and an optional custom rate.
    ///
    /// The custom rate is only consulted when the label is `custom`.
    pub fn from_label(category: &str, custom_rate: Option<f64>) -> Result<Self, RateError> {
        let key = category.trim().to_lowercase();
        if key == CUSTOM_CATEGORY {
            custom_rate
                .map(RateChoice::Custom)
                .ok_or(RateError::MissingCustomRate)
        } else {
            Ok(RateChoice::Category(key))
        }
    }
}

/// Static category rates. The custom slot is never stored here; it is
/// resolved from the `RateChoice` itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    entries: Vec<RateEntry>,
}

impl RateTable {
    /// Default estimates. Illustrative values, real returns vary.
    pub fn default_estimates() -> Self {
        Self {
            entries: vec![
                RateEntry::new("savings", "Savings account", 0.06),
                RateEntry::new("cdi", "Cash box / CDI", 0.08),
                RateEntry::new("reits", "Real-estate funds", 0.10),
                RateEntry::new("stocks", "Stocks", 0.12),
            ],
        }
    }

    /// Build a table from arbitrary rows, enforcing unique keys and
    /// non-negative rates.
    pub fn from_entries(entries: Vec<RateEntry>) -> Result<Self, RateError> {
        let mut table = Self { entries: Vec::with_capacity(entries.len()) };

        for mut entry in entries {
            entry.category = entry.category.trim().to_lowercase();

            if entry.category == CUSTOM_CATEGORY {
                // The custom slot has no static rate
                continue;
            }
            if !(entry.annual_rate >= 0.0) || !entry.annual_rate.is_finite() {
                return Err(RateError::NegativeRate {
                    category: entry.category,
                    rate: entry.annual_rate,
                });
            }
            if table.get(&entry.category).is_some() {
                return Err(RateError::DuplicateCategory(entry.category));
            }
            table.entries.push(entry);
        }

        Ok(table)
    }

    /// Resolve a choice to its nominal annual rate.
    ///
    /// Custom rates are returned unchanged; checking their sign is the
    /// caller's job.
    pub fn resolve(&self, choice: &RateChoice) -> Result<f64, RateError> {
        match choice {
            RateChoice::Custom(rate) => Ok(*rate),
            RateChoice::Category(category) => self
                .get(category)
                .map(|entry| entry.annual_rate)
                .ok_or_else(|| RateError::UnknownCategory(category.clone())),
        }
    }

    /// Display label for a choice
    pub fn label(&self, choice: &RateChoice) -> String {
        match choice {
            RateChoice::Custom(_) => "Custom rate".to_string(),
            RateChoice::Category(category) => self
                .get(category)
                .map(|entry| entry.label.clone())
                .unwrap_or_else(|| category.clone()),
        }
    }

    pub fn get(&self, category: &str) -> Option<&RateEntry> {
        let key = category.trim().to_lowercase();
        self.entries.iter().find(|entry| entry.category == key)
    }

    /// Static entries in table order
    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::default_estimates()
    }
}
