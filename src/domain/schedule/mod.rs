//! Schedule domain module - the recurrence-resolution engine.
//!
//! A session recurs on every listed weekday inside a closed date window.
//! Everything here is pure: callers pass a snapshot of sessions and get a
//! new value back, so these functions are safe to call from any number of
//! requests at once.
//!
//! # Components
//!
//! - `occurs_on` - single session, single date
//! - `highlight_dates` - days in a range with at least one class
//! - `sessions_on` - sessions meeting on one date
//! - `sweep` - sessions whose window has ended

mod enumerator;
mod errors;
mod occurrence;
mod resolver;
mod session;
mod sweep;

pub use enumerator::{highlight_dates, highlight_dates_by_walk};
pub use errors::ScheduleError;
pub use occurrence::occurs_on;
pub use resolver::sessions_on;
pub use session::{Session, SessionDraft, SessionFields};
pub use sweep::sweep;
