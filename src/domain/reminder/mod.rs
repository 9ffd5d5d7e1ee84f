//! Reminder module - class reminder text with a closing quote.
//!
//! Quotes come from an external provider on a best-effort basis; a local
//! list stands in whenever the provider fails, so composing a reminder
//! never fails.

mod message;
mod quote;

pub use message::ReminderMessage;
pub use quote::{Quote, FALLBACK_QUOTES};
