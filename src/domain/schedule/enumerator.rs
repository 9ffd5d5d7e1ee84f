//! Range enumerator: which days in a range have at least one class.

use std::collections::BTreeSet;

use crate::domain::foundation::CalendarDate;

use super::{occurs_on, Session};

/// Dates in `[range_start, range_end]` on which any of `sessions` occurs.
///
/// For each session the window is clipped to the range, then every listed
/// weekday is visited directly: the first matching day is found by weekday
/// offset and the rest follow in strides of seven days.
pub fn highlight_dates<'a, I>(
    sessions: I,
    range_start: CalendarDate,
    range_end: CalendarDate,
) -> BTreeSet<CalendarDate>
where
    I: IntoIterator<Item = &'a Session>,
{
    let mut dates = BTreeSet::new();

    for session in sessions {
        let Some((from, to)) = session.window_within(range_start, range_end) else {
            continue;
        };

        for day in session.weekdays().iter() {
            let offset = from.weekday().days_until(day);
            let mut current = from.add_days(i64::from(offset));

            while let Some(date) = current {
                if date > to {
                    break;
                }
                debug_assert!(occurs_on(session, date));
                dates.insert(date);
                current = date.add_days(7);
            }
        }
    }

    dates
}

/// Day-by-day reference version of [`highlight_dates`].
///
/// Tests every day of each clipped window with [`occurs_on`]. Produces the
/// same set; kept for cross-checking and for very short ranges.
pub fn highlight_dates_by_walk<'a, I>(
    sessions: I,
    range_start: CalendarDate,
    range_end: CalendarDate,
) -> BTreeSet<CalendarDate>
where
    I: IntoIterator<Item = &'a Session>,
{
    let mut dates = BTreeSet::new();

    for session in sessions {
        let Some((from, to)) = session.window_within(range_start, range_end) else {
            continue;
        };

        let mut current = Some(from);
        while let Some(date) = current {
            if date > to {
                break;
            }
            if occurs_on(session, date) {
                dates.insert(date);
            }
            current = date.next_day();
        }
    }

    dates
}
