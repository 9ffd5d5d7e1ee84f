//! Day resolver: the sessions that meet on one date.

use crate::domain::foundation::CalendarDate;

use super::{occurs_on, Session};

/// Sessions occurring on `date`, in input order.
pub fn sessions_on<'a, I>(sessions: I, date: CalendarDate) -> Vec<&'a Session>
where
    I: IntoIterator<Item = &'a Session>,
{
    sessions
        .into_iter()
        .filter(|session| occurs_on(session, date))
        .collect()
}
