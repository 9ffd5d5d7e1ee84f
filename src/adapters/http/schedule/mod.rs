//! HTTP adapter for schedule endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    DaySessionsResponse, ErrorResponse, MonthSessionsResponse, ReminderResponse,
    SessionRequest, SessionResponse, SweepResponse,
};
pub use handlers::ScheduleHandlers;
pub use routes::schedule_routes;
