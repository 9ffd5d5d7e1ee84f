//! Occurrence predicate: does a session meet on a given date?

use crate::domain::foundation::CalendarDate;

use super::Session;

/// True iff `date` lies in the session's closed window and falls on one of
/// its weekdays.
///
/// Every other schedule query is built on this predicate.
pub fn occurs_on(session: &Session, date: CalendarDate) -> bool {
    session.start_date() <= date
        && date <= session.end_date()
        && session.weekdays().contains(date.weekday())
}
