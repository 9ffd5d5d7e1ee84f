//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands mutate stored sessions; queries run the recurrence engine over
//! a repository snapshot.

pub mod handlers;

pub use handlers::*;
