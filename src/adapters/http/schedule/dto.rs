//! HTTP DTOs for schedule endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::{ComposedReminder, DaySessions, SweepResult};
use crate::domain::foundation::{CalendarDate, CalendarMonth};
use crate::domain::reminder::Quote;
use crate::domain::schedule::{ScheduleError, Session, SessionFields};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of create and update requests.
///
/// Every field is optional at the wire level so that missing values are
/// reported together with the other validation failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionRequest {
    pub name: Option<String>,
    pub time_label: Option<String>,
    pub link: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub weekdays: Option<Vec<String>>,
}

impl From<SessionRequest> for SessionFields {
    fn from(req: SessionRequest) -> Self {
        Self {
            name: req.name,
            time_label: req.time_label,
            link: req.link,
            start_date: req.start_date,
            end_date: req.end_date,
            weekdays: req.weekdays,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A stored session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: String,
    pub name: String,
    pub time_label: String,
    pub link: String,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub weekdays: Vec<String>,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id().to_string(),
            name: session.name().to_string(),
            time_label: session.time_label().to_string(),
            link: session.link().to_string(),
            start_date: session.start_date(),
            end_date: session.end_date(),
            weekdays: session.weekdays().canonical_names(),
        }
    }
}

/// Sessions active in a month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSessionsResponse {
    pub month: String,
    pub items: Vec<SessionResponse>,
}

impl MonthSessionsResponse {
    pub fn new(month: CalendarMonth, sessions: &[Session]) -> Self {
        Self {
            month: month.to_string(),
            items: sessions.iter().map(Into::into).collect(),
        }
    }
}

/// Sessions meeting on one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySessionsResponse {
    pub date: CalendarDate,
    pub items: Vec<SessionResponse>,
}

impl From<DaySessions> for DaySessionsResponse {
    fn from(day: DaySessions) -> Self {
        Self {
            date: day.date,
            items: day.sessions.iter().map(Into::into).collect(),
        }
    }
}

/// Outcome of a sweep run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResponse {
    pub today: CalendarDate,
    pub candidates: usize,
    pub deleted: u64,
}

impl From<SweepResult> for SweepResponse {
    fn from(result: SweepResult) -> Self {
        Self {
            today: result.today,
            candidates: result.candidates,
            deleted: result.deleted,
        }
    }
}

/// A composed reminder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderResponse {
    pub session_id: String,
    pub message: String,
    pub share_link: String,
    pub quote: Quote,
}

impl From<ComposedReminder> for ReminderResponse {
    fn from(reminder: ComposedReminder) -> Self {
        Self {
            session_id: reminder.session_id.to_string(),
            message: reminder.message,
            share_link: reminder.share_link,
            quote: reminder.quote,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&ScheduleError> for ErrorResponse {
    fn from(error: &ScheduleError) -> Self {
        let fields = error.fields();
        Self {
            code: error.code().to_string(),
            message: error.message(),
            details: (!fields.is_empty()).then(|| serde_json::json!({ "fields": fields })),
        }
    }
}
