//! HTTP routes for schedule endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    create_session, delete_session, get_quote, highlight_month, list_day_sessions,
    list_month_sessions, list_today_sessions, run_sweep, session_reminder, update_session,
    ScheduleHandlers,
};

/// Creates the schedule router with all endpoints, relative to `/api`.
pub fn schedule_routes(handlers: ScheduleHandlers) -> Router {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/today", get(list_today_sessions))
        .route("/sessions/month/:year/:month", get(list_month_sessions))
        .route("/sessions/day/:date", get(list_day_sessions))
        .route("/sessions/highlights/:year/:month", get(highlight_month))
        .route("/sessions/:id", put(update_session).delete(delete_session))
        .route("/sessions/:id/reminder", get(session_reminder))
        .route("/sweep", post(run_sweep))
        .route("/quote", get(get_quote))
        .with_state(handlers)
}
