//! Output records for projections

use serde::{Deserialize, Serialize};

use super::params::{GrowthParams, HorizonParams};
use super::returns::{effective_annual_rate, real_annual_rate};

/// Outcome of an independence-horizon search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonResult {
    /// Inputs the search ran with
    pub params: HorizonParams,

    /// False when the horizon cap was hit before the target was covered
    pub converged_within_horizon: bool,

    /// Month at which the target was first covered, or the horizon
    pub months: u32,

    /// Capital at `months`
    pub ending_capital: f64,

    /// Nominal annual rate the search compounded with
    pub annual_rate_used: f64,

    /// Inflation-adjusted annual expenses at the last month checked
    pub target_annual_expenses: f64,

    /// Capital required at the last month checked
    pub required_capital: f64,
}

impl HorizonResult {
    /// Elapsed time in fractional years
    pub fn years(&self) -> f64 {
        self.months as f64 / 12.0
    }

    /// Capital left over beyond the requirement (negative when short)
    pub fn surplus(&self) -> f64 {
        self.ending_capital - self.required_capital
    }

    /// Rate net of the inflation the target grew with
    pub fn real_annual_rate(&self) -> f64 {
        real_annual_rate(self.annual_rate_used, self.params.inflation_rate)
    }

    pub fn summary(&self) -> HorizonSummary {
        HorizonSummary {
            params: self.params,
            converged_within_horizon: self.converged_within_horizon,
            months: self.months,
            years: self.years(),
            ending_capital: self.ending_capital,
            required_capital: self.required_capital,
            target_annual_expenses: self.target_annual_expenses,
            surplus: self.surplus(),
            annual_rate_used: self.annual_rate_used,
            effective_annual_rate: effective_annual_rate(self.annual_rate_used),
            real_annual_rate: self.real_annual_rate(),
        }
    }
}

/// Horizon result with derived figures, as reported to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HorizonSummary {
    pub params: HorizonParams,
    pub converged_within_horizon: bool,
    pub months: u32,
    pub years: f64,
    pub ending_capital: f64,
    pub required_capital: f64,
    pub target_annual_expenses: f64,
    pub surplus: f64,
    pub annual_rate_used: f64,
    pub effective_annual_rate: f64,
    pub real_annual_rate: f64,
}

/// Capital at the end of a projection year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlySnapshot {
    pub year: u32,
    pub capital: f64,
}

/// Outcome of a fixed-duration growth projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    /// Inputs the projection ran with
    pub params: GrowthParams,

    /// Capital after the final month
    pub ending_capital: f64,

    /// One entry per year, years 1..=duration
    pub yearly_snapshots: Vec<YearlySnapshot>,
}

impl GrowthResult {
    pub fn new(params: GrowthParams) -> Self {
        Self {
            params,
            ending_capital: params.initial_capital,
            yearly_snapshots: Vec::with_capacity(params.duration_years as usize),
        }
    }

    /// Record the capital at the end of a year
    pub fn add_snapshot(&mut self, year: u32, capital: f64) {
        self.yearly_snapshots.push(YearlySnapshot { year, capital });
    }

    /// Snapshots with the year-0 value (the initial capital) prepended
    pub fn with_initial_year(&self) -> Vec<YearlySnapshot> {
        let mut rows = Vec::with_capacity(self.yearly_snapshots.len() + 1);
        rows.push(YearlySnapshot {
            year: 0,
            capital: self.params.initial_capital,
        });
        rows.extend_from_slice(&self.yearly_snapshots);
        rows
    }

    /// Initial capital plus every monthly contribution
    pub fn total_contributed(&self) -> f64 {
        self.params.initial_capital
            + self.params.monthly_contribution * self.params.total_months() as f64
    }

    /// Capital earned by compounding
    pub fn total_growth(&self) -> f64 {
        self.ending_capital - self.total_contributed()
    }

    /// Get summary statistics
    pub fn summary(&self) -> GrowthSummary {
        GrowthSummary {
            duration_years: self.params.duration_years,
            total_contributed: self.total_contributed(),
            total_growth: self.total_growth(),
            ending_capital: self.ending_capital,
            effective_annual_rate: effective_annual_rate(self.params.annual_rate),
        }
    }
}

/// Summary statistics for a growth projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSummary {
    pub duration_years: u32,
    pub total_contributed: f64,
    pub total_growth: f64,
    pub ending_capital: f64,
    /// Annual growth the flat monthly rate actually yields
    pub effective_annual_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> GrowthResult {
        let mut result = GrowthResult::new(GrowthParams::new(1000.0, 100.0, 0.0, 2));
        result.add_snapshot(1, 2200.0);
        result.add_snapshot(2, 3400.0);
        result.ending_capital = 3400.0;
        result
    }

    #[test]
    fn test_initial_year_prepended() {
        let rows = sample().with_initial_year();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], YearlySnapshot { year: 0, capital: 1000.0 });
        assert_eq!(rows[2].year, 2);
    }

    #[test]
    fn test_summary_totals() {
        let summary = sample().summary();

        assert_relative_eq!(summary.total_contributed, 3400.0);
        assert_relative_eq!(summary.total_growth, 0.0);
        assert_eq!(summary.duration_years, 2);
        assert_eq!(summary.effective_annual_rate, 0.0);
    }

    #[test]
    fn test_growth_summary_reports_effective_rate() {
        let result = crate::projection::project_growth(&GrowthParams::new(1000.0, 100.0, 0.08, 10));
        assert_relative_eq!(result.summary().effective_annual_rate, 0.08299950681, epsilon = 1e-9);
    }

    #[test]
    fn test_horizon_summary_includes_inflation_adjustment() {
        let params = HorizonParams::new(0.0, 500.0, 0.08, 0.04, 48_000.0);
        let result = crate::projection::compute_independence_horizon(&params);
        let summary = result.summary();

        assert_relative_eq!(summary.real_annual_rate, 1.08 / 1.04 - 1.0, epsilon = 1e-12);
        assert_relative_eq!(summary.effective_annual_rate, 0.08299950681, epsilon = 1e-9);
        assert_eq!(summary.months, result.months);
        assert_relative_eq!(summary.surplus, result.surplus());

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["real_annual_rate"].as_f64().is_some());
        assert!(json["effective_annual_rate"].as_f64().is_some());
        assert_eq!(json["params"]["inflation_rate"].as_f64(), Some(0.04));
    }
}
