//! Immutable input records for the two calculators
//!
//! Rates are fractions (7% = 0.07) and already resolved through the rate
//! table. Validation happens here, before the engine is invoked; the engine
//! itself assumes valid input.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Inputs for the independence-horizon search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonParams {
    /// Capital already invested at month 0
    pub initial_capital: f64,

    /// Amount added at the start of every month
    pub monthly_contribution: f64,

    /// Nominal annual return
    pub annual_rate: f64,

    /// Annual inflation applied to the expense target each year
    pub inflation_rate: f64,

    /// Annual expenses to cover, in month-0 money
    pub target_annual_expenses: f64,
}

impl HorizonParams {
    pub fn new(
        initial_capital: f64,
        monthly_contribution: f64,
        annual_rate: f64,
        inflation_rate: f64,
        target_annual_expenses: f64,
    ) -> Self {
        Self {
            initial_capital,
            monthly_contribution,
            annual_rate,
            inflation_rate,
            target_annual_expenses,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        non_negative("initial capital", self.initial_capital)?;
        non_negative("monthly contribution", self.monthly_contribution)?;
        non_negative("annual rate", self.annual_rate)?;
        non_negative("inflation rate", self.inflation_rate)?;
        positive("target annual expenses", self.target_annual_expenses)?;
        Ok(())
    }

    /// Validate and return self, for builder-style call sites
    pub fn validated(self) -> Result<Self, ValidationError> {
        self.validate().map(|_| self)
    }
}

/// Longest growth projection accepted, matching the independence horizon
pub const MAX_DURATION_YEARS: u32 = 100;

/// Inputs for the fixed-duration growth projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthParams {
    pub initial_capital: f64,
    pub monthly_contribution: f64,
    pub annual_rate: f64,
    /// Whole years to simulate (1..=MAX_DURATION_YEARS)
    pub duration_years: u32,
}

impl GrowthParams {
    pub fn new(initial_capital: f64, monthly_contribution: f64, annual_rate: f64, duration_years: u32) -> Self {
        Self {
            initial_capital,
            monthly_contribution,
            annual_rate,
            duration_years,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        non_negative("initial capital", self.initial_capital)?;
        non_negative("monthly contribution", self.monthly_contribution)?;
        non_negative("annual rate", self.annual_rate)?;
        if self.duration_years < 1 {
            return Err(ValidationError::NotPositive {
                field: "duration in years",
                value: self.duration_years as f64,
            });
        }
        if self.duration_years > MAX_DURATION_YEARS {
            return Err(ValidationError::TooLarge {
                field: "duration in years",
                value: self.duration_years as f64,
                max: MAX_DURATION_YEARS as f64,
            });
        }
        Ok(())
    }

    pub fn validated(self) -> Result<Self, ValidationError> {
        self.validate().map(|_| self)
    }

    /// Total number of monthly steps
    pub fn total_months(&self) -> u64 {
        u64::from(self.duration_years) * 12
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if finite(field, value)? < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if finite(field, value)? <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(())
}
