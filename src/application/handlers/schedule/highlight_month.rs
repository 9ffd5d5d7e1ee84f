//! HighlightMonthHandler - Calendar days in a month with at least one class.

use std::sync::Arc;

use crate::domain::foundation::{CalendarDate, CalendarMonth};
use crate::domain::schedule::{highlight_dates, ScheduleError};
use crate::ports::SessionRepository;

/// Query for the highlighted days of a month.
#[derive(Debug, Clone, Copy)]
pub struct HighlightMonthQuery {
    pub month: CalendarMonth,
}

/// Handler for month highlights.
pub struct HighlightMonthHandler {
    repository: Arc<dyn SessionRepository>,
}

impl HighlightMonthHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Returns the highlighted dates in ascending order.
    pub async fn handle(&self, query: HighlightMonthQuery) -> Result<Vec<CalendarDate>, ScheduleError> {
        let (from, to) = (query.month.first_day(), query.month.last_day());
        let sessions = self.repository.list_overlapping(from, to).await?;
        let dates: Vec<CalendarDate> = highlight_dates(&sessions, from, to).into_iter().collect();

        tracing::debug!(
            month = %query.month,
            sessions = sessions.len(),
            highlighted = dates.len(),
            "Computed month highlights"
        );
        Ok(dates)
    }
}
