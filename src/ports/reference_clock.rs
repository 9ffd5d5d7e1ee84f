//! Reference clock port.
//!
//! "Today" is a calendar date in the deployment's single reference
//! timezone. Engine functions never read a clock themselves; handlers ask
//! this port and pass the date in.

use crate::domain::foundation::CalendarDate;

pub trait ReferenceClock: Send + Sync {
    /// The current date in the reference timezone.
    fn today(&self) -> CalendarDate;
}
