//! Fallback quote provider.
//!
//! Wraps another provider and substitutes a quote from the built-in list
//! whenever it fails, so callers never see a quote error.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::reminder::Quote;
use crate::ports::{QuoteProvider, ReferenceClock};

pub struct FallbackQuoteProvider {
    primary: Option<Arc<dyn QuoteProvider>>,
    clock: Arc<dyn ReferenceClock>,
}

impl FallbackQuoteProvider {
    pub fn new(primary: Arc<dyn QuoteProvider>, clock: Arc<dyn ReferenceClock>) -> Self {
        Self {
            primary: Some(primary),
            clock,
        }
    }

    /// Only ever serves local quotes.
    pub fn local_only(clock: Arc<dyn ReferenceClock>) -> Self {
        Self {
            primary: None,
            clock,
        }
    }

    fn local_quote(&self) -> Quote {
        Quote::fallback_for(self.clock.today())
    }
}

#[async_trait]
impl QuoteProvider for FallbackQuoteProvider {
    async fn fetch(&self) -> Result<Quote, DomainError> {
        let Some(primary) = &self.primary else {
            return Ok(self.local_quote());
        };

        match primary.fetch().await {
            Ok(quote) => Ok(quote),
            Err(e) => {
                tracing::warn!(error = %e, "Quote provider failed, using local quote");
                Ok(self.local_quote())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FixedClock;
    use crate::domain::foundation::{CalendarDate, ErrorCode};

    struct StaticProvider(Quote);

    #[async_trait]
    impl QuoteProvider for StaticProvider {
        async fn fetch(&self) -> Result<Quote, DomainError> {
            Ok(self.0.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl QuoteProvider for FailingProvider {
        async fn fetch(&self) -> Result<Quote, DomainError> {
            Err(DomainError::new(ErrorCode::ExternalServiceError, "offline"))
        }
    }

    fn clock(date: &str) -> Arc<dyn ReferenceClock> {
        Arc::new(FixedClock::new(date.parse::<CalendarDate>().unwrap()))
    }

    #[tokio::test]
    async fn passes_through_primary_quote() {
        let quote = Quote::new("Sigue adelante.", "Anónimo");
        let provider =
            FallbackQuoteProvider::new(Arc::new(StaticProvider(quote.clone())), clock("2024-01-01"));

        assert_eq!(provider.fetch().await.unwrap(), quote);
    }

    #[tokio::test]
    async fn failure_yields_local_quote_for_today() {
        let provider = FallbackQuoteProvider::new(Arc::new(FailingProvider), clock("2024-01-03"));

        let quote = provider.fetch().await.unwrap();
        assert_eq!(quote, Quote::fallback_for("2024-01-03".parse().unwrap()));
    }

    #[tokio::test]
    async fn local_only_never_calls_out() {
        let provider = FallbackQuoteProvider::local_only(clock("2024-06-10"));

        let quote = provider.fetch().await.unwrap();
        assert!(!quote.quote.is_empty());
        assert!(!quote.author.is_empty());
    }
}
