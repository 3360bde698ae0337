//! Investor Assistant - educational investing companion built on a projection engine
//!
//! This library provides:
//! - Rate resolution for investment categories (built-in estimates or CSV)
//! - Financial-independence horizon search with inflation-adjusted targets
//! - Compound growth projection with yearly snapshots
//! - Category comparisons run in parallel
//! - Narration-ready summaries and a cancelable speech collaborator
//! - Question answering and strategy prompts over the Gemini API

pub mod error;
pub mod rates;
pub mod projection;
pub mod scenario;
pub mod narrative;
pub mod advisor;
pub mod speech;

// Re-export commonly used types
pub use error::{AssistantError, Result};
pub use rates::{RateChoice, RateTable};
pub use projection::{
    compute_independence_horizon, project_growth, GrowthParams, GrowthResult, HorizonParams,
    HorizonResult, ProjectionEngine,
};
pub use scenario::ScenarioRunner;
pub use speech::{MutedSpeaker, PacedSpeaker, Speaker, Utterance};
