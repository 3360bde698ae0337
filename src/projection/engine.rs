//! Core monthly compounding engine
//!
//! Both calculators step capital one month at a time:
//! `capital = (capital + contribution) * (1 + annual_rate / 12)`.
//! Loops are bounded by the horizon or the requested duration, so every call
//! terminates regardless of input.

use log::debug;

use super::params::{GrowthParams, HorizonParams};
use super::results::{GrowthResult, HorizonResult};
use super::state::ProjectionState;

/// Hard cap on the independence search (100 years)
pub const HORIZON_MONTHS: u32 = 1200;

/// Capital needed per unit of annual expenses (the 4% withdrawal rule)
pub const INDEPENDENCE_MULTIPLIER: f64 = 25.0;

/// Constants governing a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Maximum months the independence search may run
    pub horizon_months: u32,

    /// Multiple of annual expenses that counts as independence
    pub independence_multiplier: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_months: HORIZON_MONTHS,
            independence_multiplier: INDEPENDENCE_MULTIPLIER,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Find the first whole month at which capital covers the
    /// inflation-adjusted target.
    ///
    /// The target is inflated at the start of every 12th month, checked, and
    /// only then is the month's contribution and growth applied. Hitting the
    /// horizon is reported with `converged_within_horizon = false`, the
    /// capital after the final step, and the target of the last month checked.
    pub fn project_horizon(&self, params: &HorizonParams) -> HorizonResult {
        let multiplier = self.config.independence_multiplier;
        let mut state = ProjectionState::new(params.initial_capital, params.target_annual_expenses);
        let mut required = state.required_capital(multiplier);

        while state.month < self.config.horizon_months {
            if state.is_year_boundary() {
                state.inflate_target(params.inflation_rate);
            }

            required = state.required_capital(multiplier);
            if state.capital >= required {
                debug!(
                    "Independence reached at month {} (capital {:.2} >= {:.2})",
                    state.month, state.capital, required
                );
                return self.horizon_result(params, &state, required, true);
            }

            state.advance_month(params.monthly_contribution, params.annual_rate);
        }

        debug!(
            "Independence not reached within {} months (capital {:.2})",
            state.month, state.capital
        );
        self.horizon_result(params, &state, required, false)
    }

    fn horizon_result(
        &self,
        params: &HorizonParams,
        state: &ProjectionState,
        required_capital: f64,
        converged: bool,
    ) -> HorizonResult {
        HorizonResult {
            params: *params,
            converged_within_horizon: converged,
            months: state.month,
            ending_capital: state.capital,
            annual_rate_used: params.annual_rate,
            target_annual_expenses: state.target_annual_expenses,
            required_capital,
        }
    }

    /// Simulate `duration_years * 12` months, recording capital at the end of
    /// every year.
    pub fn project_growth(&self, params: &GrowthParams) -> GrowthResult {
        let mut result = GrowthResult::new(*params);
        let mut state = ProjectionState::new(params.initial_capital, 0.0);

        for _month in 1..=params.total_months() {
            state.advance_month(params.monthly_contribution, params.annual_rate);

            if state.is_year_boundary() {
                result.add_snapshot(state.year(), state.capital);
            }
        }

        result.ending_capital = state.capital;
        debug!(
            "Projected {} years: ending capital {:.2}",
            params.duration_years, result.ending_capital
        );
        result
    }
}

/// Independence horizon with the standard 1200-month cap and 25x multiplier
pub fn compute_independence_horizon(params: &HorizonParams) -> HorizonResult {
    ProjectionEngine::default().project_horizon(params)
}

/// Growth projection with yearly snapshots
pub fn project_growth(params: &GrowthParams) -> GrowthResult {
    ProjectionEngine::default().project_growth(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    /// Target at a month: inflated once per completed year
    fn inflated_target(params: &HorizonParams, months: u32) -> f64 {
        let mut target = params.target_annual_expenses;
        for _ in 0..months / 12 {
            target *= 1.0 + params.inflation_rate;
        }
        target
    }

    #[test]
    fn test_monthly_saver_reaches_independence() {
        let params = HorizonParams::new(0.0, 500.0, 0.08, 0.04, 48_000.0);
        let result = compute_independence_horizon(&params);

        assert!(result.converged_within_horizon);
        assert!(result.months > 0 && result.months < HORIZON_MONTHS);
        assert_eq!(result.annual_rate_used, 0.08);

        let target = inflated_target(&params, result.months);
        assert_eq!(result.target_annual_expenses, target);
        assert_eq!(result.required_capital, target * INDEPENDENCE_MULTIPLIER);
        assert!(result.ending_capital >= result.required_capital);
        assert!(result.surplus() >= 0.0);
    }

    #[test]
    fn test_convergence_month_is_the_first() {
        let params = HorizonParams::new(0.0, 500.0, 0.08, 0.04, 48_000.0);
        let result = compute_independence_horizon(&params);
        assert!(result.months > 0);

        // Replaying one month less must still be short of the target
        let mut capital = 0.0;
        for _ in 0..result.months - 1 {
            capital = (capital + 500.0) * (1.0 + 0.08 / 12.0);
        }
        let earlier_target = inflated_target(&params, result.months - 1) * INDEPENDENCE_MULTIPLIER;
        assert!(capital < earlier_target);
    }

    #[test]
    fn test_already_independent_at_month_zero() {
        let params = HorizonParams::new(1_500_000.0, 0.0, 0.05, 0.04, 48_000.0);
        let result = compute_independence_horizon(&params);

        assert!(result.converged_within_horizon);
        assert_eq!(result.months, 0);
        assert_eq!(result.ending_capital, 1_500_000.0);
        assert_eq!(result.target_annual_expenses, 48_000.0);
    }

    #[test]
    fn test_zero_rate_is_purely_additive() {
        let params = HorizonParams::new(0.0, 2000.0, 0.0, 0.0, 48_000.0);
        let result = compute_independence_horizon(&params);

        assert!(result.converged_within_horizon);
        assert_eq!(result.months, 600);
        assert_relative_eq!(result.months as f64 * 2000.0, 48_000.0 * 25.0);
    }

    #[test]
    fn test_zero_rate_rounds_up_to_whole_month() {
        let params = HorizonParams::new(0.0, 1999.0, 0.0, 0.0, 48_000.0);
        let result = compute_independence_horizon(&params);

        // 1_200_000 / 1999 = 600.3, so month 601 is the first covered month
        assert_eq!(result.months, 601);
        assert!(result.ending_capital >= 1_200_000.0);
        assert!(result.ending_capital - 1999.0 < 1_200_000.0);
    }

    #[test]
    fn test_no_growth_against_inflation_never_converges() {
        let params = HorizonParams::new(0.0, 0.0, 0.0, 0.10, 48_000.0);
        let result = compute_independence_horizon(&params);

        assert!(!result.converged_within_horizon);
        assert_eq!(result.months, HORIZON_MONTHS);
        assert_eq!(result.ending_capital, 0.0);
        assert!(result.required_capital > 48_000.0 * 25.0);
    }

    #[test]
    fn test_exhausted_search_reports_last_checked_target() {
        let params = HorizonParams::new(0.0, 0.0, 0.0, 0.10, 48_000.0);
        let result = compute_independence_horizon(&params);

        // Month 1199 is the last one checked, after 99 yearly inflation steps
        let last_checked = inflated_target(&params, HORIZON_MONTHS - 1);
        assert_eq!(result.target_annual_expenses, last_checked);
        assert_eq!(result.required_capital, last_checked * INDEPENDENCE_MULTIPLIER);
        assert!(result.target_annual_expenses < inflated_target(&params, HORIZON_MONTHS));
    }

    #[test]
    fn test_slow_saver_hits_cap() {
        // Without any growth, 100/month needs 12,000 months
        let params = HorizonParams::new(0.0, 100.0, 0.0, 0.0, 48_000.0);
        let result = compute_independence_horizon(&params);

        assert!(!result.converged_within_horizon);
        assert_eq!(result.months, 1200);
        assert_relative_eq!(result.ending_capital, 120_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_inflation_freezes_target() {
        let params = HorizonParams::new(10_000.0, 1_000.0, 0.06, 0.0, 30_000.0);
        let result = compute_independence_horizon(&params);

        assert!(result.converged_within_horizon);
        assert_eq!(result.target_annual_expenses, 30_000.0);
        assert_eq!(result.required_capital, 750_000.0);
    }

    #[test]
    fn test_custom_horizon_config() {
        let engine = ProjectionEngine::new(ProjectionConfig {
            horizon_months: 24,
            ..Default::default()
        });
        let result = engine.project_horizon(&HorizonParams::new(0.0, 500.0, 0.08, 0.04, 48_000.0));

        assert!(!result.converged_within_horizon);
        assert_eq!(result.months, 24);
    }

    #[test]
    fn test_growth_scenario() {
        let params = GrowthParams::new(1000.0, 100.0, 0.08, 10);
        let result = project_growth(&params);

        assert_eq!(result.yearly_snapshots.len(), 10);
        for (i, snapshot) in result.yearly_snapshots.iter().enumerate() {
            assert_eq!(snapshot.year, i as u32 + 1);
        }
        for pair in result.yearly_snapshots.windows(2) {
            assert!(pair[1].capital > pair[0].capital);
        }
        assert!(result.ending_capital > 1000.0 + 100.0 * 120.0);
        assert_eq!(result.ending_capital, result.yearly_snapshots[9].capital);
    }

    #[test]
    fn test_growth_matches_closed_form() {
        let params = GrowthParams::new(1000.0, 100.0, 0.12, 5);
        let result = project_growth(&params);

        let i: f64 = 0.01;
        let n = 60;
        let growth = (1.0 + i).powi(n);
        // Annuity-due accumulation plus the lump sum
        let expected = 1000.0 * growth + 100.0 * (growth - 1.0) / i * (1.0 + i);
        assert_relative_eq!(result.ending_capital, expected, max_relative = 1e-10);
    }

    #[test]
    fn test_growth_zero_rate_is_flat_sum() {
        let result = project_growth(&GrowthParams::new(500.0, 50.0, 0.0, 3));

        let capitals: Vec<f64> = result.yearly_snapshots.iter().map(|s| s.capital).collect();
        assert_eq!(capitals, vec![1100.0, 1700.0, 2300.0]);
        assert_relative_eq!(result.total_growth(), 0.0);
    }

    #[test]
    fn test_growth_without_contribution_compounds_lump_sum() {
        let result = project_growth(&GrowthParams::new(1000.0, 0.0, 0.06, 1));
        assert_relative_eq!(result.ending_capital, 1000.0 * (1.005f64).powi(12), max_relative = 1e-12);
    }

    #[test]
    fn test_growth_is_deterministic() {
        let params = GrowthParams::new(2500.0, 300.0, 0.10, 25);
        assert_eq!(project_growth(&params), project_growth(&params));
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_horizon_is_bounded_and_consistent(
            initial in 0u32..2_000_000,
            contribution in 0u32..20_000,
            rate_bp in 0u32..2_000,
            inflation_bp in 0u32..1_500,
            target in 1u32..200_000
        ) {
            let params = HorizonParams::new(
                initial as f64,
                contribution as f64,
                rate_bp as f64 / 10_000.0,
                inflation_bp as f64 / 10_000.0,
                target as f64,
            );
            let result = compute_independence_horizon(&params);

            prop_assert!(result.months <= HORIZON_MONTHS);
            if result.months < HORIZON_MONTHS {
                prop_assert!(result.converged_within_horizon);
                prop_assert!(result.ending_capital >= result.required_capital);
            } else {
                prop_assert!(!result.converged_within_horizon);
            }
        }

        #[test]
        fn prop_more_contribution_never_takes_longer(
            initial in 0u32..500_000,
            contribution in 0u32..10_000,
            extra in 1u32..5_000,
            rate_bp in 0u32..1_500,
            inflation_bp in 0u32..1_000,
            target in 1u32..150_000
        ) {
            let rate = rate_bp as f64 / 10_000.0;
            let inflation = inflation_bp as f64 / 10_000.0;
            let base = HorizonParams::new(initial as f64, contribution as f64, rate, inflation, target as f64);
            let richer = HorizonParams { monthly_contribution: (contribution + extra) as f64, ..base };

            let slow = compute_independence_horizon(&base);
            let fast = compute_independence_horizon(&richer);
            prop_assert!(fast.months <= slow.months);
        }

        #[test]
        fn prop_larger_target_never_arrives_sooner(
            initial in 0u32..500_000,
            contribution in 0u32..10_000,
            rate_bp in 0u32..1_500,
            inflation_bp in 0u32..1_000,
            target in 1u32..150_000,
            extra in 1u32..50_000
        ) {
            let rate = rate_bp as f64 / 10_000.0;
            let inflation = inflation_bp as f64 / 10_000.0;
            let base = HorizonParams::new(initial as f64, contribution as f64, rate, inflation, target as f64);
            let larger = HorizonParams { target_annual_expenses: (target + extra) as f64, ..base };

            prop_assert!(compute_independence_horizon(&larger).months >= compute_independence_horizon(&base).months);
        }

        #[test]
        fn prop_growth_snapshot_count_matches_duration(
            initial in 0u32..1_000_000,
            contribution in 0u32..10_000,
            rate_bp in 0u32..2_000,
            years in 1u32..60
        ) {
            let params = GrowthParams::new(initial as f64, contribution as f64, rate_bp as f64 / 10_000.0, years);
            let result = project_growth(&params);

            prop_assert_eq!(result.yearly_snapshots.len(), years as usize);
            let last = result.yearly_snapshots.last().map(|s| s.capital);
            prop_assert_eq!(last, Some(result.ending_capital));
        }
    }
}
