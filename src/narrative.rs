//! Narration-ready sentences for projection results

use crate::projection::{GrowthResult, HorizonResult};

/// Currency prefix for every amount
pub const CURRENCY_SYMBOL: &str = "R$";

/// Format an amount with thousands separators and two decimals,
/// e.g. `R$ 1,234,567.89`.
pub fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{} {}.{}", sign, CURRENCY_SYMBOL, grouped, cents)
}

/// Format a fractional rate as a percentage with one decimal (0.08 -> "8.0%")
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Sentence describing an independence-horizon result
pub fn horizon_narrative(result: &HorizonResult, category_label: &str) -> String {
    let params = &result.params;
    let setup = format!(
        "With a monthly investment of {} and initial capital of {} in {} ({} return p.a., {} inflation p.a.)",
        format_money(params.monthly_contribution),
        format_money(params.initial_capital),
        category_label,
        format_percent(result.annual_rate_used),
        format_percent(params.inflation_rate),
    );

    if result.converged_within_horizon {
        format!(
            "{}, it would take approximately {:.1} years to reach financial independence, \
             considering target annual expenses of {}.",
            setup,
            result.years(),
            format_money(params.target_annual_expenses),
        )
    } else {
        format!(
            "{}, it may take more than {:.0} years to reach financial independence with \
             target annual expenses of {}. Consider investing more or reducing expenses.",
            setup,
            result.years(),
            format_money(params.target_annual_expenses),
        )
    }
}

/// Sentence describing a growth projection
pub fn growth_narrative(result: &GrowthResult, category_label: &str) -> String {
    let params = &result.params;
    let years = if params.duration_years == 1 { "year" } else { "years" };

    format!(
        "Investing {} per month on top of {} in {} ({} return p.a.) for {} {} would grow to {}: \
         {} contributed and {} earned by compounding.",
        format_money(params.monthly_contribution),
        format_money(params.initial_capital),
        category_label,
        format_percent(params.annual_rate),
        params.duration_years,
        years,
        format_money(result.ending_capital),
        format_money(result.total_contributed()),
        format_money(result.total_growth()),
    )
}
