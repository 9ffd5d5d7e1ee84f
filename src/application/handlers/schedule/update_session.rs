//! UpdateSessionHandler - Replaces every field of an existing session.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, WeekdayLocale};
use crate::domain::schedule::{ScheduleError, Session, SessionDraft, SessionFields};
use crate::ports::SessionRepository;

/// Command to update a session.
#[derive(Debug, Clone)]
pub struct UpdateSessionCommand {
    pub session_id: SessionId,
    pub fields: SessionFields,
}

/// Handler for updating sessions.
pub struct UpdateSessionHandler {
    repository: Arc<dyn SessionRepository>,
    locale: WeekdayLocale,
}

impl UpdateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, locale: WeekdayLocale) -> Self {
        Self { repository, locale }
    }

    pub async fn handle(&self, cmd: UpdateSessionCommand) -> Result<Session, ScheduleError> {
        let draft = SessionDraft::parse(cmd.fields, self.locale)?;
        let session = self.repository.replace(&cmd.session_id, draft).await?;

        tracing::info!(
            session_id = %session.id(),
            end_date = %session.end_date(),
            "Session updated"
        );

        Ok(session)
    }
}
