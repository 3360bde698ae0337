//! Rate resolution: investment category to estimated nominal annual return

mod table;
pub mod loader;

pub use table::{RateChoice, RateEntry, RateTable, CUSTOM_CATEGORY};
pub use loader::{load_rates, load_rates_from_reader, DEFAULT_RATES_PATH};
