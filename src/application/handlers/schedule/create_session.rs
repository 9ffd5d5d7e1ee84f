//! CreateSessionHandler - Command handler for registering a class session.

use std::sync::Arc;

use crate::domain::foundation::WeekdayLocale;
use crate::domain::schedule::{ScheduleError, Session, SessionDraft, SessionFields};
use crate::ports::SessionRepository;

/// Command to create a new session.
#[derive(Debug, Clone, Default)]
pub struct CreateSessionCommand {
    pub fields: SessionFields,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    repository: Arc<dyn SessionRepository>,
    locale: WeekdayLocale,
}

impl CreateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, locale: WeekdayLocale) -> Self {
        Self { repository, locale }
    }

    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<Session, ScheduleError> {
        let draft = SessionDraft::parse(cmd.fields, self.locale)?;
        let session = self.repository.insert(draft).await?;

        tracing::info!(
            session_id = %session.id(),
            start_date = %session.start_date(),
            end_date = %session.end_date(),
            "Session created"
        );

        Ok(session)
    }
}
