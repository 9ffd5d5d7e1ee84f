//! HTTP quote provider.
//!
//! Fetches a random inspirational quote in English and translates it to
//! the target language through the public Google translate endpoint.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpQuoteConfig::default()
//!     .with_target_language("es")
//!     .with_timeout(Duration::from_secs(5));
//!
//! let provider = HttpQuoteProvider::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::reminder::Quote;
use crate::ports::QuoteProvider;

/// Configuration for the HTTP quote provider.
#[derive(Debug, Clone)]
pub struct HttpQuoteConfig {
    /// Random quote endpoint returning `{ content, author }`.
    pub quote_url: String,
    /// Translate endpoint (`translate_a/single`).
    pub translate_url: String,
    /// Target language code, e.g. `es`.
    pub target_language: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for HttpQuoteConfig {
    fn default() -> Self {
        Self {
            quote_url: "https://api.quotable.io/random?tags=inspirational".to_string(),
            translate_url: "https://translate.googleapis.com/translate_a/single".to_string(),
            target_language: "es".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

impl HttpQuoteConfig {
    pub fn with_quote_url(mut self, url: impl Into<String>) -> Self {
        self.quote_url = url.into();
        self
    }

    pub fn with_translate_url(mut self, url: impl Into<String>) -> Self {
        self.translate_url = url.into();
        self
    }

    pub fn with_target_language(mut self, language: impl Into<String>) -> Self {
        self.target_language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Quote provider backed by two remote HTTP services.
pub struct HttpQuoteProvider {
    config: HttpQuoteConfig,
    client: Client,
}

impl HttpQuoteProvider {
    pub fn new(config: HttpQuoteConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        Self { config, client }
    }

    async fn fetch_original(&self) -> Result<RemoteQuote, DomainError> {
        let response = self
            .client
            .get(&self.config.quote_url)
            .send()
            .await
            .map_err(|e| upstream_error("Quote request failed", e))?
            .error_for_status()
            .map_err(|e| upstream_error("Quote service returned an error", e))?;

        let quote: RemoteQuote = response
            .json()
            .await
            .map_err(|e| upstream_error("Invalid quote payload", e))?;

        if quote.content.trim().is_empty() {
            return Err(DomainError::new(
                ErrorCode::ExternalServiceError,
                "Quote service returned an empty quote",
            ));
        }
        Ok(quote)
    }

    async fn translate(&self, text: &str) -> Result<String, DomainError> {
        let response = self
            .client
            .post(&self.config.translate_url)
            .query(&[
                ("client", "gtx"),
                ("sl", "en"),
                ("tl", self.config.target_language.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| upstream_error("Translate request failed", e))?
            .error_for_status()
            .map_err(|e| upstream_error("Translate service returned an error", e))?;

        let payload: Value = response
            .json()
            .await
            .map_err(|e| upstream_error("Invalid translate payload", e))?;

        extract_translation(&payload).ok_or_else(|| {
            DomainError::new(
                ErrorCode::ExternalServiceError,
                "Translate payload has no translated text",
            )
        })
    }
}

#[async_trait]
impl QuoteProvider for HttpQuoteProvider {
    async fn fetch(&self) -> Result<Quote, DomainError> {
        let original = self.fetch_original().await?;
        let translated = self.translate(&original.content).await?;
        Ok(Quote::new(translated, original.author))
    }
}

#[derive(Debug, Deserialize)]
struct RemoteQuote {
    content: String,
    author: String,
}

/// Reads `payload[0][0][0]`, the first translated segment.
fn extract_translation(payload: &Value) -> Option<String> {
    payload
        .get(0)?
        .get(0)?
        .get(0)?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn upstream_error(context: &str, err: reqwest::Error) -> DomainError {
    DomainError::new(ErrorCode::ExternalServiceError, format!("{}: {}", context, err))
}
