//! Prompt construction for the educational assistant

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// How much volatility the investor accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    pub fn description(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "Low (conservative)",
            RiskTolerance::Medium => "Medium (moderate)",
            RiskTolerance::High => "High (aggressive)",
        }
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskTolerance::Low => "Low",
            RiskTolerance::Medium => "Medium",
            RiskTolerance::High => "High",
        };
        f.write_str(name)
    }
}

impl FromStr for RiskTolerance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "conservative" => Ok(RiskTolerance::Low),
            "medium" | "moderate" => Ok(RiskTolerance::Medium),
            "high" | "aggressive" => Ok(RiskTolerance::High),
            other => Err(format!("unknown risk tolerance: {} (expected low, medium or high)", other)),
        }
    }
}

/// What the investor is saving for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentGoal {
    LongTermGrowth,
    PassiveIncome,
    CapitalPreservation,
    BuyHome,
    ChildrenEducation,
}

impl InvestmentGoal {
    pub const ALL: [InvestmentGoal; 5] = [
        InvestmentGoal::LongTermGrowth,
        InvestmentGoal::PassiveIncome,
        InvestmentGoal::CapitalPreservation,
        InvestmentGoal::BuyHome,
        InvestmentGoal::ChildrenEducation,
    ];

    /// Command-line spelling
    pub fn key(&self) -> &'static str {
        match self {
            InvestmentGoal::LongTermGrowth => "long-term-growth",
            InvestmentGoal::PassiveIncome => "passive-income",
            InvestmentGoal::CapitalPreservation => "capital-preservation",
            InvestmentGoal::BuyHome => "buy-home",
            InvestmentGoal::ChildrenEducation => "children-education",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            InvestmentGoal::LongTermGrowth => "Long-term growth (e.g. retirement)",
            InvestmentGoal::PassiveIncome => "Passive income (e.g. dividends)",
            InvestmentGoal::CapitalPreservation => "Capital preservation (e.g. emergency fund)",
            InvestmentGoal::BuyHome => "Buying a home",
            InvestmentGoal::ChildrenEducation => "Children's education",
        }
    }
}

impl fmt::Display for InvestmentGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InvestmentGoal::LongTermGrowth => "Long-term growth",
            InvestmentGoal::PassiveIncome => "Passive income",
            InvestmentGoal::CapitalPreservation => "Capital preservation",
            InvestmentGoal::BuyHome => "Buying a home",
            InvestmentGoal::ChildrenEducation => "Children's education",
        };
        f.write_str(name)
    }
}

impl FromStr for InvestmentGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['_', ' '], "-");
        InvestmentGoal::ALL
            .into_iter()
            .find(|goal| goal.key() == key)
            .ok_or_else(|| {
                let keys: Vec<&str> = InvestmentGoal::ALL.iter().map(|g| g.key()).collect();
                format!("unknown investment goal: {} (expected one of {})", s, keys.join(", "))
            })
    }
}

/// Risk/goal pair a strategy is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestorProfile {
    pub risk_tolerance: RiskTolerance,
    pub goal: InvestmentGoal,
}

impl Default for InvestorProfile {
    fn default() -> Self {
        Self {
            risk_tolerance: RiskTolerance::Medium,
            goal: InvestmentGoal::LongTermGrowth,
        }
    }
}

/// Prompt for a free-form educational question
pub fn question_prompt(question: &str) -> Result<String, ValidationError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(ValidationError::BlankQuestion);
    }

    Ok(format!(
        "You are an AI assistant focused on educating small investors about financial and \
         investing concepts. Provide clear, concise and easy-to-understand explanations. Avoid \
         complex jargon and focus on fundamentals. Answer the following question: \"{}\"",
        question
    ))
}

/// Prompt for a general strategy matching the investor profile
pub fn strategy_prompt(profile: &InvestorProfile) -> String {
    format!(
        "You are an AI financial advisor for small investors. Based on a risk tolerance of \"{}\" \
         and an investment goal of \"{}\", provide a clear, general investment strategy. Explain \
         the key principles and give examples of suitable asset types. Keep the language simple \
         and focused on education.",
        profile.risk_tolerance, profile.goal
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_prompt_quotes_question() {
        let prompt = question_prompt("  What is inflation? ").unwrap();
        assert!(prompt.starts_with("You are an AI assistant focused on educating small investors"));
        assert!(prompt.ends_with("Answer the following question: \"What is inflation?\""));
    }

    #[test]
    fn test_blank_question_rejected() {
        assert_eq!(question_prompt("   \n"), Err(ValidationError::BlankQuestion));
    }

    #[test]
    fn test_strategy_prompt_mentions_profile() {
        let profile = InvestorProfile {
            risk_tolerance: RiskTolerance::High,
            goal: InvestmentGoal::PassiveIncome,
        };
        let prompt = strategy_prompt(&profile);

        assert!(prompt.contains("risk tolerance of \"High\""));
        assert!(prompt.contains("investment goal of \"Passive income\""));
    }

    #[test]
    fn test_parse_profile_values() {
        assert_eq!("MEDIUM".parse::<RiskTolerance>(), Ok(RiskTolerance::Medium));
        assert_eq!("aggressive".parse::<RiskTolerance>(), Ok(RiskTolerance::High));
        assert!("reckless".parse::<RiskTolerance>().is_err());

        assert_eq!("buy_home".parse::<InvestmentGoal>(), Ok(InvestmentGoal::BuyHome));
        assert_eq!("Children Education".parse::<InvestmentGoal>(), Ok(InvestmentGoal::ChildrenEducation));
        assert!("yacht".parse::<InvestmentGoal>().unwrap_err().contains("long-term-growth"));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(RiskTolerance::Low.description(), "Low (conservative)");
        assert_eq!(InvestmentGoal::BuyHome.description(), "Buying a home");
    }

    #[test]
    fn test_default_profile() {
        let profile = InvestorProfile::default();
        assert_eq!(profile.risk_tolerance, RiskTolerance::Medium);
        assert_eq!(profile.goal, InvestmentGoal::LongTermGrowth);
    }
}
