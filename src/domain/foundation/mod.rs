//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the class calendar domain.

mod calendar_date;
mod errors;
mod ids;
mod weekday;

pub use calendar_date::{CalendarDate, CalendarMonth, MAX_YEAR, MIN_YEAR};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use weekday::{normalize, normalize_set, Weekday, WeekdayLocale, WeekdaySet};
