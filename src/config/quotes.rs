//! Quote service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Quote service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct QuotesConfig {
    /// Random quote endpoint
    #[serde(default = "default_quote_url")]
    pub quote_url: String,

    /// Translate endpoint
    #[serde(default = "default_translate_url")]
    pub translate_url: String,

    /// Language quotes are translated to
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// When false only local quotes are served
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl QuotesConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate quote configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.enabled {
            return Ok(());
        }
        for url in [&self.quote_url, &self.translate_url] {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(ValidationError::InvalidQuoteUrl(url.clone()));
            }
        }
        if self.target_language.trim().is_empty() {
            return Err(ValidationError::MissingRequired("QUOTES__TARGET_LANGUAGE"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            quote_url: default_quote_url(),
            translate_url: default_translate_url(),
            target_language: default_target_language(),
            timeout_secs: default_timeout(),
            enabled: default_enabled(),
        }
    }
}

fn default_quote_url() -> String {
    "https://api.quotable.io/random?tags=inspirational".to_string()
}

fn default_translate_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_target_language() -> String {
    "es".to_string()
}

fn default_timeout() -> u64 {
    5
}

fn default_enabled() -> bool {
    true
}
