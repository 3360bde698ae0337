//! Scenario runner: resolve rates once, then run calculations per category
//!
//! Comparisons fan out across rate categories in parallel. Every projection
//! is independent, so no coordination is needed between them.

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::projection::{GrowthParams, GrowthResult, HorizonParams, HorizonResult, ProjectionEngine};
use crate::rates::{RateChoice, RateTable};

/// A result tagged with the rate category it was run under
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryOutcome<T> {
    pub category: String,
    pub label: String,
    pub annual_rate: f64,
    pub result: T,
}

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let result = runner.run_horizon(&RateChoice::Category("cdi".into()), 0.0, 500.0, 0.04, 48_000.0)?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    rates: RateTable,
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the built-in rate estimates
    pub fn new() -> Self {
        Self::with_rates(RateTable::default_estimates())
    }

    /// Create runner with a pre-built rate table
    pub fn with_rates(rates: RateTable) -> Self {
        Self {
            rates,
            engine: ProjectionEngine::default(),
        }
    }

    /// Resolve the rate, validate, and run the independence search
    pub fn run_horizon(
        &self,
        choice: &RateChoice,
        initial_capital: f64,
        monthly_contribution: f64,
        inflation_rate: f64,
        target_annual_expenses: f64,
    ) -> Result<HorizonResult> {
        let annual_rate = self.rates.resolve(choice)?;
        let params = HorizonParams::new(
            initial_capital,
            monthly_contribution,
            annual_rate,
            inflation_rate,
            target_annual_expenses,
        )
        .validated()?;

        Ok(self.engine.project_horizon(&params))
    }

    /// Resolve the rate, validate, and run the growth projection
    pub fn run_growth(
        &self,
        choice: &RateChoice,
        initial_capital: f64,
        monthly_contribution: f64,
        duration_years: u32,
    ) -> Result<GrowthResult> {
        let annual_rate = self.rates.resolve(choice)?;
        let params = GrowthParams::new(initial_capital, monthly_contribution, annual_rate, duration_years)
            .validated()?;

        Ok(self.engine.project_growth(&params))
    }

    /// Run the independence search once per table category, plus the custom
    /// rate when given. The `annual_rate` in `base` is replaced per category.
    pub fn compare_horizons(
        &self,
        base: &HorizonParams,
        custom_rate: Option<f64>,
    ) -> Result<Vec<CategoryOutcome<HorizonResult>>> {
        let choices = self.comparison_choices(custom_rate);
        info!("Comparing independence horizon across {} categories", choices.len());

        choices
            .par_iter()
            .map(|choice| -> Result<CategoryOutcome<HorizonResult>> {
                let annual_rate = self.rates.resolve(choice)?;
                let params = HorizonParams { annual_rate, ..*base }.validated()?;
                Ok(self.outcome(choice, annual_rate, self.engine.project_horizon(&params)))
            })
            .collect()
    }

    /// Run the growth projection once per table category, plus the custom
    /// rate when given.
    pub fn compare_growth(
        &self,
        base: &GrowthParams,
        custom_rate: Option<f64>,
    ) -> Result<Vec<CategoryOutcome<GrowthResult>>> {
        let choices = self.comparison_choices(custom_rate);
        info!("Comparing growth across {} categories", choices.len());

        choices
            .par_iter()
            .map(|choice| -> Result<CategoryOutcome<GrowthResult>> {
                let annual_rate = self.rates.resolve(choice)?;
                let params = GrowthParams { annual_rate, ..*base }.validated()?;
                Ok(self.outcome(choice, annual_rate, self.engine.project_growth(&params)))
            })
            .collect()
    }

    fn comparison_choices(&self, custom_rate: Option<f64>) -> Vec<RateChoice> {
        self.rates
            .entries()
            .iter()
            .map(|entry| RateChoice::Category(entry.category.clone()))
            .chain(custom_rate.map(RateChoice::Custom))
            .collect()
    }

    fn outcome<T>(&self, choice: &RateChoice, annual_rate: f64, result: T) -> CategoryOutcome<T> {
        let category = match choice {
            RateChoice::Category(category) => category.clone(),
            RateChoice::Custom(_) => crate::rates::CUSTOM_CATEGORY.to_string(),
        };
        CategoryOutcome {
            category,
            label: self.rates.label(choice),
            annual_rate,
            result,
        }
    }

    /// Get reference to the rate table
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
