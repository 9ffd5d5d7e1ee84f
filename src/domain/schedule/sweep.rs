//! Expiry sweep: sessions whose window has ended.

use std::collections::BTreeSet;

use crate::domain::foundation::{CalendarDate, SessionId};

use super::Session;

/// Identifiers of sessions whose `end_date` is strictly before `today`.
///
/// `today` is supplied by the caller in the deployment's reference
/// timezone; this function never reads a clock. Deleting the returned ids
/// and sweeping again with the same `today` yields an empty set.
pub fn sweep<'a, I>(sessions: I, today: CalendarDate) -> BTreeSet<SessionId>
where
    I: IntoIterator<Item = &'a Session>,
{
    sessions
        .into_iter()
        .filter(|session| session.is_expired(today))
        .map(|session| *session.id())
        .collect()
}
