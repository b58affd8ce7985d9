//! Feedback provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Feedback (AI) provider configuration
#[derive(Debug, Deserialize)]
pub struct FeedbackConfig {
    /// Gemini API key; feedback falls back to a placeholder when absent
    pub gemini_api_key: Option<Secret<String>>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl FeedbackConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a Gemini API key is configured
    pub fn has_gemini(&self) -> bool {
        self.gemini_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Expose the configured API key, if any
    pub fn api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .filter(|k| !k.is_empty())
    }

    /// Validate feedback configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.is_empty() {
            return Err(ValidationError::MissingRequired("FEEDBACK_MODEL"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            model: default_model(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_no_key() {
        let config = FeedbackConfig::default();
        assert!(!config.has_gemini());
        assert!(config.api_key().is_none());
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_key_counts_as_absent() {
        let config = FeedbackConfig {
            gemini_api_key: Some(Secret::new(String::new())),
            ..Default::default()
        };
        assert!(!config.has_gemini());
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_present_key_is_exposed() {
        let config = FeedbackConfig {
            gemini_api_key: Some(Secret::new("test-key".to_string())),
            ..Default::default()
        };
        assert!(config.has_gemini());
        assert_eq!(config.api_key(), Some("test-key"));
    }

    #[test]
    fn test_timeout_conversion() {
        let config = FeedbackConfig {
            timeout_secs: 15,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_empty_model_fails_validation() {
        let config = FeedbackConfig {
            model: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_timeout_bounds() {
        let config = FeedbackConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }
}
