//! Gemini API client
//!
//! One `generateContent` call per prompt; the first candidate's first text
//! part is the answer. Uses a long-lived reqwest::Client for connection pooling.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use log::{error, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::TextGenerator;
use crate::error::AdvisorError;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Connection settings, normally read from the environment
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl AdvisorConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Read `GEMINI_API_KEY` (required), `GEMINI_MODEL` and `GEMINI_BASE_URL`
    pub fn from_env() -> Result<Self, AdvisorError> {
        let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(AdvisorError::MissingApiKey);
        }

        let mut config = Self::new(api_key.trim());
        if let Ok(model) = env::var("GEMINI_MODEL") {
            config.model = model;
        }
        if let Ok(base_url) = env::var("GEMINI_BASE_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Full `generateContent` endpoint, without the key
    pub fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url.trim_end_matches('/'), self.model)
    }
}

#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
}

impl GeminiRequest {
    /// Single-turn user request
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GeminiResponse {
    /// First candidate's first text part
    pub fn into_text(self) -> Result<String, AdvisorError> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(AdvisorError::EmptyResponse)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// Message for a failed call: the API's `error.message` when the body has
/// one, otherwise the HTTP reason phrase.
pub fn api_error_message(body: &str, status_text: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .and_then(|detail| detail.message)
        .unwrap_or_else(|| status_text.to_string())
}

/// Reusable Gemini client (connection-pooled)
pub struct GeminiClient {
    client: Client,
    config: AdvisorConfig,
}

impl GeminiClient {
    pub fn new(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, AdvisorError> {
        Self::new(AdvisorConfig::from_env()?)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AdvisorError> {
        if self.config.api_key.is_empty() {
            return Err(AdvisorError::MissingApiKey);
        }

        info!("Calling Gemini API ({})", self.config.model);

        let response = self
            .client
            .post(self.config.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&GeminiRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| {
                error!("Gemini API request failed: {}", e);
                AdvisorError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = api_error_message(&body, status.canonical_reason().unwrap_or("request failed"));
            error!("Gemini API error response ({}): {}", status, message);
            return Err(AdvisorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GeminiResponse = response.json().await?;
        let text = parsed.into_text()?;
        info!("Gemini response received ({} chars)", text.len());
        Ok(text)
    }
}
