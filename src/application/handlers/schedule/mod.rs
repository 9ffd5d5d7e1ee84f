//! Schedule handlers - Session commands, calendar queries, sweep, reminders.

mod compose_reminder;
mod create_session;
mod delete_session;
mod highlight_month;
mod list_day_sessions;
mod list_month_sessions;
mod sweep_expired_sessions;
mod update_session;

pub use compose_reminder::{ComposeReminderHandler, ComposeReminderQuery, ComposedReminder};
pub use create_session::{CreateSessionCommand, CreateSessionHandler};
pub use delete_session::{DeleteSessionCommand, DeleteSessionHandler};
pub use highlight_month::{HighlightMonthHandler, HighlightMonthQuery};
pub use list_day_sessions::{DaySessions, ListDaySessionsHandler, ListDaySessionsQuery};
pub use list_month_sessions::{ListMonthSessionsHandler, ListMonthSessionsQuery};
pub use sweep_expired_sessions::{SweepExpiredSessionsHandler, SweepResult};
pub use update_session::{UpdateSessionCommand, UpdateSessionHandler};
