//! Schedule-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, ValidationError};

/// Errors surfaced by session commands and queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Session was not found.
    NotFound(SessionId),
    /// One or more request fields are invalid.
    ValidationFailed(Vec<ValidationError>),
    /// Storage or other infrastructure failure.
    Infrastructure(String),
}

impl ScheduleError {
    pub fn not_found(id: SessionId) -> Self {
        ScheduleError::NotFound(id)
    }
    pub fn validation(error: ValidationError) -> Self {
        ScheduleError::ValidationFailed(vec![error])
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ScheduleError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ScheduleError::NotFound(_) => ErrorCode::SessionNotFound,
            ScheduleError::ValidationFailed(errors) => match errors.as_slice() {
                [single] => single.code(),
                _ => ErrorCode::ValidationFailed,
            },
            ScheduleError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ScheduleError::NotFound(id) => format!("Session not found: {}", id),
            ScheduleError::ValidationFailed(errors) => {
                let reasons: Vec<String> = errors.iter().map(ToString::to_string).collect();
                format!("Validation failed: {}", reasons.join("; "))
            }
            ScheduleError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
    /// Offending field names, in report order, without duplicates.
    pub fn fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = Vec::new();
        if let ScheduleError::ValidationFailed(errors) = self {
            for error in errors {
                if !fields.iter().any(|f| f == error.field()) {
                    fields.push(error.field().to_string());
                }
            }
        }
        fields
    }
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ScheduleError {}

impl From<ValidationError> for ScheduleError {
    fn from(err: ValidationError) -> Self {
        ScheduleError::validation(err)
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ScheduleError::ValidationFailed(errors)
    }
}

impl From<DomainError> for ScheduleError {
    fn from(err: DomainError) -> Self {
        let missing_id = err
            .details
            .get("session_id")
            .and_then(|id| id.parse::<SessionId>().ok());

        match (err.code, missing_id) {
            (ErrorCode::SessionNotFound, Some(id)) => ScheduleError::NotFound(id),
            _ => ScheduleError::Infrastructure(err.to_string()),
        }
    }
}
