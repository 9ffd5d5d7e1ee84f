//! In-memory implementation of SessionRepository.
//!
//! Backs tests and local runs without a database. A single `RwLock`
//! guards the map, so each operation (including the conditional expiry
//! delete) is atomic with respect to the others.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use tokio::sync::RwLock;

use crate::domain::foundation::{CalendarDate, DomainError, SessionId};
use crate::domain::schedule::{Session, SessionDraft};
use crate::ports::{session_not_found, SessionRepository};

/// In-memory session store.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

fn sorted(mut sessions: Vec<Session>) -> Vec<Session> {
    sessions.sort_by(|a, b| {
        a.start_date()
            .cmp(&b.start_date())
            .then_with(|| a.name().cmp(b.name()))
            .then_with(|| a.id().cmp(b.id()))
    });
    sessions
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, draft: SessionDraft) -> Result<Session, DomainError> {
        let session = Session::new(SessionId::new(), draft);
        self.sessions
            .write()
            .await
            .insert(*session.id(), session.clone());
        Ok(session)
    }

    async fn replace(&self, id: &SessionId, draft: SessionDraft) -> Result<Session, DomainError> {
        let mut sessions = self.sessions.write().await;
        let slot = sessions.get_mut(id).ok_or_else(|| session_not_found(id))?;
        *slot = Session::new(*id, draft);
        Ok(slot.clone())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| session_not_found(id))
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Session>, DomainError> {
        let sessions = self.sessions.read().await.values().cloned().collect();
        Ok(sorted(sessions))
    }

    async fn list_overlapping(
        &self,
        from: CalendarDate,
        to: CalendarDate,
    ) -> Result<Vec<Session>, DomainError> {
        let sessions = self
            .sessions
            .read()
            .await
            .values()
            .filter(|s| s.overlaps(from, to))
            .cloned()
            .collect();
        Ok(sorted(sessions))
    }

    async fn delete_expired(
        &self,
        ids: &BTreeSet<SessionId>,
        today: CalendarDate,
    ) -> Result<u64, DomainError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|id, session| !(ids.contains(id) && session.is_expired(today)));
        Ok((before - sessions.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, Weekday, WeekdaySet};

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn draft(name: &str, start: &str, end: &str) -> SessionDraft {
        SessionDraft::new(
            name.to_string(),
            "10:00".to_string(),
            "https://meet.example.com/x".to_string(),
            date(start),
            date(end),
            WeekdaySet::new([Weekday::Tuesday]).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_id_and_stores() {
        let repo = InMemorySessionRepository::new();
        let session = repo.insert(draft("Física", "2024-01-01", "2024-03-01")).await.unwrap();

        let found = repo.find_by_id(session.id()).await.unwrap();
        assert_eq!(found, Some(session));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn replace_keeps_id_and_swaps_fields() {
        let repo = InMemorySessionRepository::new();
        let session = repo.insert(draft("Física", "2024-01-01", "2024-03-01")).await.unwrap();

        let updated = repo
            .replace(session.id(), draft("Química", "2024-02-01", "2024-04-01"))
            .await
            .unwrap();

        assert_eq!(updated.id(), session.id());
        assert_eq!(updated.name(), "Química");
        assert_eq!(updated.end_date(), date("2024-04-01"));
    }

    #[tokio::test]
    async fn replace_unknown_is_not_found() {
        let repo = InMemorySessionRepository::new();
        let err = repo
            .replace(&SessionId::new(), draft("X", "2024-01-01", "2024-01-02"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn delete_removes_then_reports_not_found() {
        let repo = InMemorySessionRepository::new();
        let session = repo.insert(draft("Física", "2024-01-01", "2024-03-01")).await.unwrap();

        repo.delete(session.id()).await.unwrap();
        assert!(repo.is_empty().await);

        let err = repo.delete(session.id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn list_overlapping_filters_and_orders() {
        let repo = InMemorySessionRepository::new();
        repo.insert(draft("B", "2024-01-15", "2024-02-15")).await.unwrap();
        repo.insert(draft("A", "2024-01-15", "2024-01-20")).await.unwrap();
        repo.insert(draft("C", "2023-01-01", "2023-12-31")).await.unwrap();
        repo.insert(draft("D", "2024-01-31", "2024-06-30")).await.unwrap();

        let january = repo
            .list_overlapping(date("2024-01-01"), date("2024-01-31"))
            .await
            .unwrap();
        let names: Vec<&str> = january.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["A", "B", "D"]);
    }

    #[tokio::test]
    async fn delete_expired_rechecks_end_date() {
        let repo = InMemorySessionRepository::new();
        let expired = repo.insert(draft("Old", "2024-01-01", "2024-01-31")).await.unwrap();
        let extended = repo.insert(draft("Ext", "2024-01-01", "2024-01-31")).await.unwrap();

        // Extended after the sweep computed its candidates.
        repo.replace(extended.id(), draft("Ext", "2024-01-01", "2024-03-31"))
            .await
            .unwrap();

        let ids = BTreeSet::from([*expired.id(), *extended.id()]);
        let deleted = repo.delete_expired(&ids, date("2024-02-01")).await.unwrap();

        assert_eq!(deleted, 1);
        assert!(repo.find_by_id(expired.id()).await.unwrap().is_none());
        assert!(repo.find_by_id(extended.id()).await.unwrap().is_some());
    }
}
