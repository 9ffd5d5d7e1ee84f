//! Quote provider port.
//!
//! Supplies the inspirational quote that closes a class reminder.
//! Providers may fail freely; callers wrap them in a fallback.

use crate::domain::foundation::DomainError;
use crate::domain::reminder::Quote;
use async_trait::async_trait;

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch one quote.
    ///
    /// # Errors
    ///
    /// - `ExternalServiceError` when the upstream service fails
    async fn fetch(&self) -> Result<Quote, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn QuoteProvider) {}
    }
}
