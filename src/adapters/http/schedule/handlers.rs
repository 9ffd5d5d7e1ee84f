//! HTTP handlers for schedule endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{
    ComposeReminderHandler, ComposeReminderQuery, CreateSessionCommand, CreateSessionHandler,
    DeleteSessionCommand, DeleteSessionHandler, HighlightMonthHandler, HighlightMonthQuery,
    ListDaySessionsHandler, ListDaySessionsQuery, ListMonthSessionsHandler,
    ListMonthSessionsQuery, SweepExpiredSessionsHandler, UpdateSessionCommand,
    UpdateSessionHandler,
};
use crate::domain::foundation::{
    CalendarDate, CalendarMonth, SessionId, ValidationError, WeekdayLocale,
};
use crate::domain::schedule::ScheduleError;
use crate::ports::{QuoteProvider, ReferenceClock, SessionRepository};

use super::dto::{
    DaySessionsResponse, ErrorResponse, MonthSessionsResponse, ReminderResponse,
    SessionRequest, SessionResponse, SweepResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ScheduleHandlers {
    pub create_handler: Arc<CreateSessionHandler>,
    pub update_handler: Arc<UpdateSessionHandler>,
    pub delete_handler: Arc<DeleteSessionHandler>,
    pub month_handler: Arc<ListMonthSessionsHandler>,
    pub day_handler: Arc<ListDaySessionsHandler>,
    pub highlight_handler: Arc<HighlightMonthHandler>,
    pub sweep_handler: Arc<SweepExpiredSessionsHandler>,
    pub reminder_handler: Arc<ComposeReminderHandler>,
    pub quotes: Arc<dyn QuoteProvider>,
}

impl ScheduleHandlers {
    /// Wires every schedule handler over the same ports.
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        clock: Arc<dyn ReferenceClock>,
        quotes: Arc<dyn QuoteProvider>,
        locale: WeekdayLocale,
    ) -> Self {
        Self {
            create_handler: Arc::new(CreateSessionHandler::new(repository.clone(), locale)),
            update_handler: Arc::new(UpdateSessionHandler::new(repository.clone(), locale)),
            delete_handler: Arc::new(DeleteSessionHandler::new(repository.clone())),
            month_handler: Arc::new(ListMonthSessionsHandler::new(repository.clone())),
            day_handler: Arc::new(ListDaySessionsHandler::new(repository.clone(), clock.clone())),
            highlight_handler: Arc::new(HighlightMonthHandler::new(repository.clone())),
            sweep_handler: Arc::new(SweepExpiredSessionsHandler::new(repository.clone(), clock)),
            reminder_handler: Arc::new(ComposeReminderHandler::new(
                repository,
                quotes.clone(),
                locale,
            )),
            quotes,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/sessions/month/:year/:month - Sessions active in a month
pub async fn list_month_sessions(
    State(handlers): State<ScheduleHandlers>,
    Path((year, month)): Path<(String, String)>,
) -> Response {
    let month = match parse_month(&year, &month) {
        Ok(month) => month,
        Err(e) => return handle_schedule_error(e.into()),
    };

    match handlers.month_handler.handle(ListMonthSessionsQuery { month }).await {
        Ok(sessions) => {
            let response = MonthSessionsResponse::new(month, &sessions);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_schedule_error(e),
    }
}

/// GET /api/sessions/day/:date - Sessions meeting on a date
pub async fn list_day_sessions(
    State(handlers): State<ScheduleHandlers>,
    Path(date): Path<String>,
) -> Response {
    let date = match CalendarDate::parse_field("date", &date) {
        Ok(date) => date,
        Err(e) => return handle_schedule_error(e.into()),
    };

    match handlers.day_handler.handle(ListDaySessionsQuery { date }).await {
        Ok(day) => (StatusCode::OK, Json(DaySessionsResponse::from(day))).into_response(),
        Err(e) => handle_schedule_error(e),
    }
}

/// GET /api/sessions/today - Sessions meeting today
pub async fn list_today_sessions(State(handlers): State<ScheduleHandlers>) -> Response {
    match handlers.day_handler.handle_today().await {
        Ok(day) => (StatusCode::OK, Json(DaySessionsResponse::from(day))).into_response(),
        Err(e) => handle_schedule_error(e),
    }
}

/// GET /api/sessions/highlights/:year/:month - Days with at least one class
pub async fn highlight_month(
    State(handlers): State<ScheduleHandlers>,
    Path((year, month)): Path<(String, String)>,
) -> Response {
    let month = match parse_month(&year, &month) {
        Ok(month) => month,
        Err(e) => return handle_schedule_error(e.into()),
    };

    match handlers.highlight_handler.handle(HighlightMonthQuery { month }).await {
        Ok(dates) => (StatusCode::OK, Json(dates)).into_response(),
        Err(e) => handle_schedule_error(e),
    }
}

/// POST /api/sessions - Create a session
pub async fn create_session(
    State(handlers): State<ScheduleHandlers>,
    body: Result<Json<SessionRequest>, JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => return handle_schedule_error(json_rejection(rejection).into()),
    };

    let cmd = CreateSessionCommand { fields: req.into() };

    match handlers.create_handler.handle(cmd).await {
        Ok(session) => (StatusCode::CREATED, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_schedule_error(e),
    }
}

/// PUT /api/sessions/:id - Replace a session
pub async fn update_session(
    State(handlers): State<ScheduleHandlers>,
    Path(session_id): Path<String>,
    body: Result<Json<SessionRequest>, JsonRejection>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(e) => return handle_schedule_error(e.into()),
    };
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => return handle_schedule_error(json_rejection(rejection).into()),
    };

    let cmd = UpdateSessionCommand {
        session_id,
        fields: req.into(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_schedule_error(e),
    }
}

/// DELETE /api/sessions/:id - Delete a session
pub async fn delete_session(
    State(handlers): State<ScheduleHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(e) => return handle_schedule_error(e.into()),
    };

    match handlers
        .delete_handler
        .handle(DeleteSessionCommand { session_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_schedule_error(e),
    }
}

/// GET /api/sessions/:id/reminder - Shareable reminder for a session
pub async fn session_reminder(
    State(handlers): State<ScheduleHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(e) => return handle_schedule_error(e.into()),
    };

    match handlers
        .reminder_handler
        .handle(ComposeReminderQuery { session_id })
        .await
    {
        Ok(reminder) => (StatusCode::OK, Json(ReminderResponse::from(reminder))).into_response(),
        Err(e) => handle_schedule_error(e),
    }
}

/// POST /api/sweep - Run the expiry sweep now
pub async fn run_sweep(State(handlers): State<ScheduleHandlers>) -> Response {
    match handlers.sweep_handler.handle().await {
        Ok(result) => (StatusCode::OK, Json(SweepResponse::from(result))).into_response(),
        Err(e) => handle_schedule_error(e),
    }
}

/// GET /api/quote - Inspirational quote
pub async fn get_quote(State(handlers): State<ScheduleHandlers>) -> Response {
    match handlers.quotes.fetch().await {
        Ok(quote) => (StatusCode::OK, Json(quote)).into_response(),
        Err(e) => handle_schedule_error(e.into()),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Path parsing
// ════════════════════════════════════════════════════════════════════════════

fn parse_month(year: &str, month: &str) -> Result<CalendarMonth, ValidationError> {
    let year = year
        .parse::<i32>()
        .map_err(|_| ValidationError::invalid_format("year", format!("'{}' is not a year", year)))?;
    let month = month
        .parse::<u32>()
        .map_err(|_| ValidationError::invalid_format("month", format!("'{}' is not a month", month)))?;
    CalendarMonth::new(year, month)
}

fn parse_session_id(raw: &str) -> Result<SessionId, ValidationError> {
    raw.parse::<SessionId>()
        .map_err(|_| ValidationError::invalid_format("id", format!("'{}' is not a session id", raw)))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn json_rejection(rejection: JsonRejection) -> ValidationError {
    ValidationError::invalid_format("body", rejection.body_text())
}

fn handle_schedule_error(error: ScheduleError) -> Response {
    let status = match &error {
        ScheduleError::NotFound(_) => StatusCode::NOT_FOUND,
        ScheduleError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
        ScheduleError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Schedule request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(ErrorResponse::from(&error))).into_response()
}
