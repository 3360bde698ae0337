//! Effective and real return conversions
//!
//! The calculators divide the nominal rate by 12 each month. These helpers
//! report what that convention actually yields over a year, and what is left
//! of it after inflation.

/// Annual growth produced by compounding `annual_rate / 12` for twelve months
pub fn effective_annual_rate(annual_rate: f64) -> f64 {
    (1.0 + annual_rate / 12.0).powi(12) - 1.0
}

/// Inflation-adjusted (real) annual rate: `(1 + nominal) / (1 + inflation) - 1`
pub fn real_annual_rate(nominal_rate: f64, inflation_rate: f64) -> f64 {
    (1.0 + nominal_rate) / (1.0 + inflation_rate) - 1.0
}
