//! ListMonthSessionsHandler - Sessions whose window touches a month.

use std::sync::Arc;

use crate::domain::foundation::CalendarMonth;
use crate::domain::schedule::{ScheduleError, Session};
use crate::ports::SessionRepository;

/// Query for the sessions active at some point in a month.
#[derive(Debug, Clone, Copy)]
pub struct ListMonthSessionsQuery {
    pub month: CalendarMonth,
}

/// Handler for the month listing.
pub struct ListMonthSessionsHandler {
    repository: Arc<dyn SessionRepository>,
}

impl ListMonthSessionsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListMonthSessionsQuery) -> Result<Vec<Session>, ScheduleError> {
        let month = query.month;
        let sessions = self
            .repository
            .list_overlapping(month.first_day(), month.last_day())
            .await?;

        tracing::debug!(month = %month, count = sessions.len(), "Listed month sessions");
        Ok(sessions)
    }
}
