//! SweepExpiredSessionsHandler - Deletes sessions whose window has ended.
//!
//! The candidate set is computed from a snapshot; the repository re-checks
//! expiry at delete time, so a session extended in between is kept.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::CalendarDate;
use crate::domain::schedule::{sweep, ScheduleError};
use crate::ports::{ReferenceClock, SessionRepository};

/// Outcome of one sweep run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SweepResult {
    pub today: CalendarDate,
    /// Sessions found expired in the snapshot.
    pub candidates: usize,
    /// Sessions actually removed.
    pub deleted: u64,
}

/// Handler for the expiry sweep.
pub struct SweepExpiredSessionsHandler {
    repository: Arc<dyn SessionRepository>,
    clock: Arc<dyn ReferenceClock>,
}

impl SweepExpiredSessionsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, clock: Arc<dyn ReferenceClock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self) -> Result<SweepResult, ScheduleError> {
        let today = self.clock.today();
        let sessions = self.repository.list_all().await?;
        let expired = sweep(&sessions, today);

        let deleted = if expired.is_empty() {
            0
        } else {
            self.repository.delete_expired(&expired, today).await?
        };

        tracing::info!(
            today = %today,
            candidates = expired.len(),
            deleted,
            "Expired sessions swept"
        );

        Ok(SweepResult {
            today,
            candidates: expired.len(),
            deleted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, InMemorySessionRepository};
    use crate::domain::foundation::{DomainError, SessionId};
    use crate::domain::schedule::test_support::draft;
    use crate::domain::schedule::{Session, SessionDraft};
    use async_trait::async_trait;
    use std::collections::BTreeSet;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn removes_only_sessions_ended_before_today() {
        let repo = Arc::new(InMemorySessionRepository::new());
        repo.insert(draft("2024-01-01", "2024-01-31", &["monday"])).await.unwrap();
        let last_day = repo
            .insert(draft("2024-01-01", "2024-02-01", &["monday"]))
            .await
            .unwrap();

        let handler =
            SweepExpiredSessionsHandler::new(repo.clone(), Arc::new(FixedClock::new(date("2024-02-01"))));
        let result = handler.handle().await.unwrap();

        assert_eq!(
            result,
            SweepResult {
                today: date("2024-02-01"),
                candidates: 1,
                deleted: 1,
            }
        );
        assert_eq!(repo.list_all().await.unwrap(), vec![last_day]);
    }

    #[tokio::test]
    async fn second_run_deletes_nothing() {
        let repo = Arc::new(InMemorySessionRepository::new());
        repo.insert(draft("2024-01-01", "2024-01-31", &["monday"])).await.unwrap();
        let handler =
            SweepExpiredSessionsHandler::new(repo, Arc::new(FixedClock::new(date("2024-03-01"))));

        assert_eq!(handler.handle().await.unwrap().deleted, 1);
        let again = handler.handle().await.unwrap();
        assert_eq!(again.candidates, 0);
        assert_eq!(again.deleted, 0);
    }

    /// Repository whose snapshot is stale: the session was extended after
    /// `list_all` ran, so the conditional delete finds nothing to remove.
    struct ExtendedMeanwhile {
        snapshot: Session,
    }

    #[async_trait]
    impl SessionRepository for ExtendedMeanwhile {
        async fn insert(&self, _draft: SessionDraft) -> Result<Session, DomainError> {
            unimplemented!()
        }

        async fn replace(&self, _id: &SessionId, _draft: SessionDraft) -> Result<Session, DomainError> {
            unimplemented!()
        }

        async fn delete(&self, _id: &SessionId) -> Result<(), DomainError> {
            unimplemented!()
        }

        async fn find_by_id(&self, _id: &SessionId) -> Result<Option<Session>, DomainError> {
            Ok(None)
        }

        async fn list_all(&self) -> Result<Vec<Session>, DomainError> {
            Ok(vec![self.snapshot.clone()])
        }

        async fn list_overlapping(
            &self,
            _from: CalendarDate,
            _to: CalendarDate,
        ) -> Result<Vec<Session>, DomainError> {
            Ok(vec![])
        }

        async fn delete_expired(
            &self,
            ids: &BTreeSet<SessionId>,
            _today: CalendarDate,
        ) -> Result<u64, DomainError> {
            assert!(ids.contains(self.snapshot.id()));
            Ok(0)
        }
    }

    #[tokio::test]
    async fn reports_candidates_separately_from_deletions() {
        let repo = Arc::new(ExtendedMeanwhile {
            snapshot: Session::new(SessionId::new(), draft("2024-01-01", "2024-01-31", &["monday"])),
        });
        let handler =
            SweepExpiredSessionsHandler::new(repo, Arc::new(FixedClock::new(date("2024-02-15"))));

        let result = handler.handle().await.unwrap();
        assert_eq!(result.candidates, 1);
        assert_eq!(result.deleted, 0);
    }
}
