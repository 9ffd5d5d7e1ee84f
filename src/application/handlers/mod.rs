//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod schedule;

pub use schedule::{
    // Commands
    CreateSessionCommand, CreateSessionHandler,
    DeleteSessionCommand, DeleteSessionHandler,
    UpdateSessionCommand, UpdateSessionHandler,
    // Queries
    DaySessions, HighlightMonthHandler, HighlightMonthQuery,
    ListDaySessionsHandler, ListDaySessionsQuery,
    ListMonthSessionsHandler, ListMonthSessionsQuery,
    // Sweep and reminders
    ComposeReminderHandler, ComposeReminderQuery, ComposedReminder,
    SweepExpiredSessionsHandler, SweepResult,
};
