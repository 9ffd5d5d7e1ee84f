//! ComposeReminderHandler - Builds the shareable class reminder.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::{SessionId, WeekdayLocale};
use crate::domain::reminder::{Quote, ReminderMessage};
use crate::domain::schedule::ScheduleError;
use crate::ports::{QuoteProvider, SessionRepository};

/// Query for one session's reminder.
#[derive(Debug, Clone, Copy)]
pub struct ComposeReminderQuery {
    pub session_id: SessionId,
}

/// A composed reminder ready to share.
#[derive(Debug, Clone, Serialize)]
pub struct ComposedReminder {
    pub session_id: SessionId,
    pub message: String,
    pub share_link: String,
    pub quote: Quote,
}

/// Handler for reminder composition.
pub struct ComposeReminderHandler {
    repository: Arc<dyn SessionRepository>,
    quotes: Arc<dyn QuoteProvider>,
    locale: WeekdayLocale,
}

impl ComposeReminderHandler {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        quotes: Arc<dyn QuoteProvider>,
        locale: WeekdayLocale,
    ) -> Self {
        Self {
            repository,
            quotes,
            locale,
        }
    }

    pub async fn handle(&self, query: ComposeReminderQuery) -> Result<ComposedReminder, ScheduleError> {
        let session = self
            .repository
            .find_by_id(&query.session_id)
            .await?
            .ok_or(ScheduleError::NotFound(query.session_id))?;

        let quote = self.quotes.fetch().await?;
        let message = ReminderMessage::compose(&session, &quote, self.locale);

        tracing::debug!(session_id = %query.session_id, "Reminder composed");

        Ok(ComposedReminder {
            session_id: query.session_id,
            share_link: message.share_link(),
            message: message.text().to_string(),
            quote,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FallbackQuoteProvider, FixedClock, InMemorySessionRepository};
    use crate::domain::foundation::DomainError;
    use crate::domain::schedule::test_support::draft;
    use async_trait::async_trait;

    struct StaticQuote;

    #[async_trait]
    impl QuoteProvider for StaticQuote {
        async fn fetch(&self) -> Result<Quote, DomainError> {
            Ok(Quote::new("Nunca dejes de aprender.", "Anónimo"))
        }
    }

    #[tokio::test]
    async fn composes_message_with_session_and_quote() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let session = repo
            .insert(draft("2024-01-01", "2024-01-31", &["monday"]))
            .await
            .unwrap();

        let handler =
            ComposeReminderHandler::new(repo, Arc::new(StaticQuote), WeekdayLocale::Spanish);
        let reminder = handler
            .handle(ComposeReminderQuery {
                session_id: *session.id(),
            })
            .await
            .unwrap();

        assert!(reminder.message.contains("*Clase*"));
        assert!(reminder.message.contains("Nunca dejes de aprender."));
        assert!(reminder.share_link.starts_with("https://wa.me/?text="));
        assert!(!reminder.share_link.contains(' '));
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let clock = Arc::new(FixedClock::new("2024-01-01".parse().unwrap()));
        let handler = ComposeReminderHandler::new(
            Arc::new(InMemorySessionRepository::new()),
            Arc::new(FallbackQuoteProvider::local_only(clock)),
            WeekdayLocale::Spanish,
        );
        let id = SessionId::new();

        let err = handler
            .handle(ComposeReminderQuery { session_id: id })
            .await
            .unwrap_err();

        assert_eq!(err, ScheduleError::NotFound(id));
    }
}
