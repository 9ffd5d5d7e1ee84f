//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (dates, weekdays, IDs, errors)
//! - `schedule` - Class sessions and the recurrence-resolution engine
//! - `reminder` - Reminder message and quote value objects

pub mod foundation;
pub mod reminder;
pub mod schedule;
