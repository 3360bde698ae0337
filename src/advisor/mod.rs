//! Question-answering collaborator
//!
//! The assistant sends a prompt string and gets back plain text or an error.
//! `TextGenerator` is that contract; `GeminiClient` is the HTTP implementation.

pub mod catalog;
mod gemini;
mod prompts;

use async_trait::async_trait;
use log::info;

use crate::error::AdvisorError;

pub use gemini::{api_error_message, AdvisorConfig, GeminiClient, GeminiRequest, GeminiResponse, DEFAULT_MODEL};
pub use prompts::{question_prompt, strategy_prompt, InvestmentGoal, InvestorProfile, RiskTolerance};

/// Send a prompt, receive text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AdvisorError>;
}

/// Educational assistant over any text generator
pub struct Advisor<G> {
    generator: G,
}

impl<G: TextGenerator> Advisor<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Answer a free-form question about investing
    pub async fn ask(&self, question: &str) -> Result<String, AdvisorError> {
        let prompt = question_prompt(question)?;
        info!("Asking: {}", question.trim());
        self.generator.generate(&prompt).await
    }

    /// General strategy for a risk tolerance and goal
    pub async fn strategy(&self, profile: &InvestorProfile) -> Result<String, AdvisorError> {
        info!(
            "Generating strategy for risk {} and goal {}",
            profile.risk_tolerance, profile.goal
        );
        self.generator.generate(&strategy_prompt(profile)).await
    }
}
