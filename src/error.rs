//! Error types for the investor assistant
//!
//! Non-convergence of the independence search is reported as data on
//! `HorizonResult`, so it has no variant here.

use thiserror::Error;

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, AssistantError>;

/// Caller-side precondition failures, raised before any simulation runs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must be at most {max} (got {value})")]
    TooLarge { field: &'static str, value: f64, max: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("question must not be blank")]
    BlankQuestion,
}

/// Rate table lookup and loading failures
#[derive(Error, Debug)]
pub enum RateError {
    #[error("unknown investment category: {0}")]
    UnknownCategory(String),

    #[error("the custom category requires an explicit annual rate")]
    MissingCustomRate,

    #[error("category {category} has a negative annual rate ({rate})")]
    NegativeRate { category: String, rate: f64 },

    #[error("duplicate investment category: {0}")]
    DuplicateCategory(String),

    #[error("rate table CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the text-generation collaborator
#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("GEMINI_API_KEY not configured")]
    MissingApiKey,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("no answer was returned, please try again")]
    EmptyResponse,

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Umbrella error for callers that mix the calculators and collaborators
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Rate lookup failed: {0}")]
    Rate(#[from] RateError),

    #[error("Advisor error: {0}")]
    Advisor(#[from] AdvisorError),
}
