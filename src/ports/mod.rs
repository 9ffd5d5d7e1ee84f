//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionRepository` - Session storage
//! - `QuoteProvider` - Inspirational quotes for reminders
//! - `ReferenceClock` - "Today" in the reference timezone

mod quote_provider;
mod reference_clock;
mod session_repository;

pub use quote_provider::QuoteProvider;
pub use reference_clock::ReferenceClock;
pub use session_repository::{session_not_found, SessionRepository};
