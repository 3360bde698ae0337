//! Month-by-month state shared by both calculators

/// Capital position at a point in a projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Completed monthly steps (0 before the first contribution)
    pub month: u32,

    /// Accumulated capital at the current month
    pub capital: f64,

    /// Annual expense target in current-month money (horizon search only)
    pub target_annual_expenses: f64,
}

impl ProjectionState {
    /// Initialize state at month 0
    pub fn new(initial_capital: f64, target_annual_expenses: f64) -> Self {
        Self {
            month: 0,
            capital: initial_capital,
            target_annual_expenses,
        }
    }

    /// Contribute at the start of the month, then compound for one month.
    ///
    /// The monthly rate is the flat `annual_rate / 12`, not the geometric
    /// equivalent; results are expected to match that convention.
    pub fn advance_month(&mut self, monthly_contribution: f64, annual_rate: f64) {
        self.capital = (self.capital + monthly_contribution) * (1.0 + annual_rate / 12.0);
        self.month += 1;
    }

    /// True on every 12th month after month 0
    pub fn is_year_boundary(&self) -> bool {
        self.month > 0 && self.month % 12 == 0
    }

    /// Whole years completed
    pub fn year(&self) -> u32 {
        self.month / 12
    }

    /// Grow the expense target by one year of inflation
    pub fn inflate_target(&mut self, inflation_rate: f64) {
        self.target_annual_expenses *= 1.0 + inflation_rate;
    }

    /// Capital needed to cover the current target at the given multiplier
    pub fn required_capital(&self, multiplier: f64) -> f64 {
        self.target_annual_expenses * multiplier
    }
}
