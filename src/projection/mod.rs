//! Financial projection engine: independence horizon and compound growth

mod params;
mod state;
mod engine;
mod results;
pub mod returns;

pub use params::{GrowthParams, HorizonParams, MAX_DURATION_YEARS};
pub use state::ProjectionState;
pub use engine::{
    compute_independence_horizon, project_growth, ProjectionConfig, ProjectionEngine,
    HORIZON_MONTHS, INDEPENDENCE_MULTIPLIER,
};
pub use results::{GrowthResult, GrowthSummary, HorizonResult, HorizonSummary, YearlySnapshot};
pub use returns::{effective_annual_rate, real_annual_rate};
