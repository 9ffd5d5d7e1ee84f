//! Session repository port.
//!
//! Defines the contract for persisting and retrieving class sessions.
//! Implementations assign identifiers and own all storage mechanics; the
//! schedule engine only ever sees the snapshots they return.

use crate::domain::foundation::{CalendarDate, DomainError, ErrorCode, SessionId};
use crate::domain::schedule::{Session, SessionDraft};
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Repository port for class session persistence.
///
/// Not-found conditions are reported as `SessionNotFound` errors carrying
/// a `session_id` detail.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session, assigning its identifier.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, draft: SessionDraft) -> Result<Session, DomainError>;

    /// Replace every field of an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn replace(&self, id: &SessionId, draft: SessionDraft) -> Result<Session, DomainError>;

    /// Delete a session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &SessionId) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// All sessions, ordered by start date then name.
    async fn list_all(&self) -> Result<Vec<Session>, DomainError>;

    /// Sessions whose window shares at least one day with `[from, to]`,
    /// ordered by start date then name.
    async fn list_overlapping(
        &self,
        from: CalendarDate,
        to: CalendarDate,
    ) -> Result<Vec<Session>, DomainError>;

    /// Delete those of `ids` whose stored end date is still before `today`.
    ///
    /// The end date is re-checked at deletion time, so a session extended
    /// after the ids were computed survives. Returns the number deleted.
    async fn delete_expired(
        &self,
        ids: &BTreeSet<SessionId>,
        today: CalendarDate,
    ) -> Result<u64, DomainError>;
}

/// Builds the not-found error repositories report.
pub fn session_not_found(id: &SessionId) -> DomainError {
    DomainError::new(ErrorCode::SessionNotFound, format!("Session not found: {}", id))
        .with_detail("session_id", id.to_string())
}
