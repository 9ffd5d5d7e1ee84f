//! In-memory adapters for tests and database-less runs.

mod session_repository;

pub use session_repository::InMemorySessionRepository;
