//! Reference clock adapters.
//!
//! - `ZonedClock` - Today in a configured IANA timezone
//! - `FixedClock` - Pinned date for tests and replays

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::RwLock;

use crate::domain::foundation::CalendarDate;
use crate::ports::ReferenceClock;

/// Derives "today" from the system clock in a single reference timezone.
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    tz: Tz,
}

impl ZonedClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Calendar date of the instant `now` in this clock's timezone.
    pub fn date_at(&self, now: DateTime<Utc>) -> CalendarDate {
        CalendarDate::from_naive(now.with_timezone(&self.tz).date_naive())
    }
}

impl ReferenceClock for ZonedClock {
    fn today(&self) -> CalendarDate {
        self.date_at(Utc::now())
    }
}

/// Clock that always reports the date it was set to.
#[derive(Debug)]
pub struct FixedClock {
    today: RwLock<CalendarDate>,
}

impl FixedClock {
    pub fn new(today: CalendarDate) -> Self {
        Self {
            today: RwLock::new(today),
        }
    }

    /// Moves the clock to another date.
    pub fn set(&self, today: CalendarDate) {
        if let Ok(mut guard) = self.today.write() {
            *guard = today;
        }
    }
}

impl ReferenceClock for FixedClock {
    fn today(&self) -> CalendarDate {
        match self.today.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn zoned_clock_uses_local_date_not_utc_date() {
        // 03:30 UTC on Feb 1 is still Jan 31 in Bogotá (UTC-5).
        let instant = Utc.with_ymd_and_hms(2024, 2, 1, 3, 30, 0).unwrap();
        let clock = ZonedClock::new(chrono_tz::America::Bogota);

        assert_eq!(clock.date_at(instant), date("2024-01-31"));
    }

    #[test]
    fn zoned_clock_ahead_of_utc_rolls_forward() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 31, 23, 0, 0).unwrap();
        let clock = ZonedClock::new(chrono_tz::Asia::Tokyo);

        assert_eq!(clock.date_at(instant), date("2024-02-01"));
    }

    #[test]
    fn fixed_clock_reports_and_moves() {
        let clock = FixedClock::new(date("2024-01-15"));
        assert_eq!(clock.today(), date("2024-01-15"));

        clock.set(date("2024-02-01"));
        assert_eq!(clock.today(), date("2024-02-01"));
    }
}
