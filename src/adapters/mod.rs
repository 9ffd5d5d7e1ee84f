//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - Session persistence in PostgreSQL
//! - `memory` - In-process session store
//! - `clock` - Reference "today"
//! - `quotes` - Remote quotes with local fallback
//! - `scheduler` - Daily expiry sweep
//! - `http` - REST API

pub mod clock;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod quotes;
pub mod scheduler;

pub use clock::{FixedClock, ZonedClock};
pub use memory::InMemorySessionRepository;
pub use postgres::PostgresSessionRepository;
pub use quotes::{FallbackQuoteProvider, HttpQuoteConfig, HttpQuoteProvider};
pub use scheduler::{SweepScheduler, SweepSchedulerConfig};
