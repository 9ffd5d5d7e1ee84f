//! ListDaySessionsHandler - Sessions meeting on a given date or today.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::CalendarDate;
use crate::domain::schedule::{sessions_on, ScheduleError, Session};
use crate::ports::{ReferenceClock, SessionRepository};

/// Query for the sessions meeting on one date.
#[derive(Debug, Clone, Copy)]
pub struct ListDaySessionsQuery {
    pub date: CalendarDate,
}

/// Sessions meeting on `date`.
#[derive(Debug, Clone, Serialize)]
pub struct DaySessions {
    pub date: CalendarDate,
    pub sessions: Vec<Session>,
}

/// Handler for the day view and the "today" view.
pub struct ListDaySessionsHandler {
    repository: Arc<dyn SessionRepository>,
    clock: Arc<dyn ReferenceClock>,
}

impl ListDaySessionsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, clock: Arc<dyn ReferenceClock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, query: ListDaySessionsQuery) -> Result<DaySessions, ScheduleError> {
        let date = query.date;
        let candidates = self.repository.list_overlapping(date, date).await?;
        let sessions: Vec<Session> = sessions_on(&candidates, date).into_iter().cloned().collect();

        tracing::debug!(date = %date, count = sessions.len(), "Resolved day sessions");
        Ok(DaySessions { date, sessions })
    }

    /// Day view for the reference clock's current date.
    pub async fn handle_today(&self) -> Result<DaySessions, ScheduleError> {
        self.handle(ListDaySessionsQuery {
            date: self.clock.today(),
        })
        .await
    }
}
