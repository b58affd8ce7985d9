//! Gemini Provider - Implementation of FeedbackProvider for the Gemini API.
//!
//! Calls the `generateContent` endpoint with a single advisory prompt built
//! from the evaluated decision.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-2.5-flash")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let provider = GeminiFeedbackProvider::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::time::Duration;

use crate::ports::{Feedback, FeedbackError, FeedbackProvider, FeedbackRequest};

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-2.5-flash").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiFeedbackProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiFeedbackProvider {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, FeedbackError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FeedbackError::unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Builds the advisory prompt from the evaluation payload.
    fn build_prompt(request: &FeedbackRequest) -> String {
        let mut prompt = String::new();
        let _ = writeln!(
            prompt,
            "You are an intelligent decision advisor. Provide your independent \
             recommendation for this decision."
        );
        let _ = writeln!(prompt, "\n**DECISION CONTEXT:**");
        let _ = writeln!(prompt, "- Options: {}", request.options.join(", "));
        let _ = writeln!(prompt, "- Main goal: {}", request.main_consideration);
        for consideration in &request.choice_considerations {
            let _ = writeln!(
                prompt,
                "- Their thoughts on {}: {}",
                consideration.option, consideration.consideration
            );
        }

        let _ = writeln!(prompt, "\n**MATHEMATICAL ANALYSIS:**");
        let _ = writeln!(
            prompt,
            "The decision system calculated these scores based on their priorities:"
        );
        for scored in &request.scores {
            let _ = writeln!(prompt, "- {}: {:.2}", scored.option, scored.score);
        }
        let _ = writeln!(prompt, "- Calculated best option: {}", request.best_decision);

        let _ = writeln!(prompt, "\n**WEIGHTED CRITERIA:**");
        for category in &request.categories {
            let _ = writeln!(
                prompt,
                "- {} (importance {})",
                category.title, category.importance
            );
        }

        let _ = writeln!(
            prompt,
            "\nMake your own recommendation. You may agree or disagree with the \
             calculated best option; if you disagree, explain why. Cover the key \
             advantages, the risks to watch, one concrete next step, and how to \
             tell whether the choice worked out. Be direct and concise, under \
             500 words."
        );
        prompt
    }

    /// Parses the API response status and maps errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, FeedbackError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            401 | 403 => Err(FeedbackError::AuthenticationFailed),
            429 => Err(FeedbackError::RateLimited {
                retry_after_secs: 60,
            }),
            500..=599 => Err(FeedbackError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(FeedbackError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }
}

#[async_trait]
impl FeedbackProvider for GeminiFeedbackProvider {
    async fn generate(&self, request: FeedbackRequest) -> Result<Feedback, FeedbackError> {
        let body = GenerateContentRequest::from_prompt(Self::build_prompt(&request));

        let response = self
            .client
            .post(self.generate_url())
            .query(&[("key", self.config.api_key())])
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FeedbackError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    FeedbackError::network(format!("Connection failed: {}", e))
                } else {
                    FeedbackError::network(e.to_string())
                }
            })?;

        let response = self.handle_response_status(response).await?;
        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| FeedbackError::parse(e.to_string()))?;

        parsed
            .first_text()
            .map(Feedback::new)
            .ok_or_else(|| FeedbackError::parse("response contained no candidate text"))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

// ─────────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<String> {
        self.candidates
            .first()?
            .content
            .parts
            .first()
            .map(|part| part.text.clone())
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::Category;
    use crate::domain::foundation::{Importance, RawMetric};
    use crate::ports::{ChoiceConsideration, ScoredOption};

    fn request() -> FeedbackRequest {
        FeedbackRequest {
            options: vec!["A".into(), "B".into()],
            categories: vec![Category::new(
                "Cost",
                vec![RawMetric::from(10), RawMetric::from(20)],
                Importance::new(10),
            )],
            scores: vec![
                ScoredOption {
                    option: "A".into(),
                    score: 100.0,
                },
                ScoredOption {
                    option: "B".into(),
                    score: 0.0,
                },
            ],
            best_decision: "A".into(),
            main_consideration: "cheapest ride".into(),
            choice_considerations: vec![ChoiceConsideration {
                option: "A".into(),
                consideration: "known vendor".into(),
            }],
        }
    }

    #[test]
    fn prompt_includes_scores_and_context() {
        let prompt = GeminiFeedbackProvider::build_prompt(&request());
        assert!(prompt.contains("Options: A, B"));
        assert!(prompt.contains("Main goal: cheapest ride"));
        assert!(prompt.contains("- A: 100.00"));
        assert!(prompt.contains("Calculated best option: A"));
        assert!(prompt.contains("Cost (importance 10/10)"));
        assert!(prompt.contains("Their thoughts on A: known vendor"));
    }

    #[test]
    fn generate_url_embeds_model() {
        let provider = GeminiFeedbackProvider::new(
            GeminiConfig::new("key").with_base_url("http://localhost:9999"),
        )
        .unwrap();
        assert_eq!(
            provider.generate_url(),
            "http://localhost:9999/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn response_parsing_takes_first_candidate() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Choose A."}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.first_text().as_deref(), Some("Choose A."));
    }

    #[test]
    fn empty_response_has_no_text() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.first_text().is_none());
    }

    #[tokio::test]
    async fn unreachable_host_maps_to_network_error() {
        let provider = GeminiFeedbackProvider::new(
            GeminiConfig::new("key")
                .with_base_url("http://127.0.0.1:1")
                .with_timeout(Duration::from_millis(250)),
        )
        .unwrap();

        let result = provider.generate(request()).await;
        match result {
            Err(error) => assert!(error.is_retryable()),
            Ok(_) => panic!("expected connection failure"),
        }
    }
}
