//! PostgreSQL implementation of SessionRepository.
//!
//! Persists class sessions to the `class_sessions` table. Dates are stored
//! as `DATE` and weekdays as a `TEXT[]` of canonical names.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};
use std::collections::BTreeSet;

use crate::domain::foundation::{
    CalendarDate, DomainError, ErrorCode, SessionId, Weekday, WeekdaySet,
};
use crate::domain::schedule::{Session, SessionDraft};
use crate::ports::{session_not_found, SessionRepository};

const SELECT_COLUMNS: &str =
    "SELECT id, name, time_label, link, start_date, end_date, weekdays FROM class_sessions";

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    /// Creates a new PostgresSessionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn insert(&self, draft: SessionDraft) -> Result<Session, DomainError> {
        let id = SessionId::new();

        sqlx::query(
            r#"
            INSERT INTO class_sessions (
                id, name, time_label, link, start_date, end_date, weekdays
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id.as_uuid())
        .bind(draft.name())
        .bind(draft.time_label())
        .bind(draft.link())
        .bind(draft.start_date().as_naive())
        .bind(draft.end_date().as_naive())
        .bind(draft.weekdays().canonical_names())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert session", e))?;

        Ok(Session::new(id, draft))
    }

    async fn replace(&self, id: &SessionId, draft: SessionDraft) -> Result<Session, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE class_sessions SET
                name = $2,
                time_label = $3,
                link = $4,
                start_date = $5,
                end_date = $6,
                weekdays = $7,
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(draft.name())
        .bind(draft.time_label())
        .bind(draft.link())
        .bind(draft.start_date().as_naive())
        .bind(draft.end_date().as_naive())
        .bind(draft.weekdays().canonical_names())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update session", e))?;

        if result.rows_affected() == 0 {
            return Err(session_not_found(id));
        }

        Ok(Session::new(*id, draft))
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM class_sessions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete session", e))?;

        if result.rows_affected() == 0 {
            return Err(session_not_found(id));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch session", e))?;

        row.map(row_to_session).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(&format!("{} ORDER BY start_date, name, id", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list sessions", e))?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn list_overlapping(
        &self,
        from: CalendarDate,
        to: CalendarDate,
    ) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE start_date <= $2 AND end_date >= $1 ORDER BY start_date, name, id",
            SELECT_COLUMNS
        ))
        .bind(from.as_naive())
        .bind(to.as_naive())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list sessions by range", e))?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn delete_expired(
        &self,
        ids: &BTreeSet<SessionId>,
        today: CalendarDate,
    ) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let uuids: Vec<uuid::Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let result =
            sqlx::query("DELETE FROM class_sessions WHERE id = ANY($1) AND end_date < $2")
                .bind(uuids)
                .bind(today.as_naive())
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to delete expired sessions", e))?;

        Ok(result.rows_affected())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn weekdays_from_stored(names: &[String]) -> Result<WeekdaySet, DomainError> {
    let days = names
        .iter()
        .map(|name| {
            Weekday::from_canonical(name).ok_or_else(|| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid stored weekday: {}", name),
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    WeekdaySet::new(days).map_err(|e| DomainError::database("Invalid stored weekdays", e))
}

fn row_to_session(row: sqlx::postgres::PgRow) -> Result<Session, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database("Failed to get id", e))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::database("Failed to get name", e))?;
    let time_label: String = row
        .try_get("time_label")
        .map_err(|e| DomainError::database("Failed to get time_label", e))?;
    let link: String = row
        .try_get("link")
        .map_err(|e| DomainError::database("Failed to get link", e))?;
    let start_date: NaiveDate = row
        .try_get("start_date")
        .map_err(|e| DomainError::database("Failed to get start_date", e))?;
    let end_date: NaiveDate = row
        .try_get("end_date")
        .map_err(|e| DomainError::database("Failed to get end_date", e))?;
    let weekdays: Vec<String> = row
        .try_get("weekdays")
        .map_err(|e| DomainError::database("Failed to get weekdays", e))?;

    let draft = SessionDraft::new(
        name,
        time_label,
        link,
        CalendarDate::from_naive(start_date),
        CalendarDate::from_naive(end_date),
        weekdays_from_stored(&weekdays)?,
    )
    .map_err(|errors| {
        let reasons: Vec<String> = errors.iter().map(ToString::to_string).collect();
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Stored session {} is invalid: {}", id, reasons.join("; ")),
        )
    })?;

    Ok(Session::new(SessionId::from_uuid(id), draft))
}
