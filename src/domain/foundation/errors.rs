//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised while turning boundary input into domain values.
///
/// These only ever occur at ingestion (create/update). Query-time
/// operations work on already-validated values and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    MissingField { field: String },

    #[error("Unrecognized weekday: '{token}'")]
    UnrecognizedWeekday { token: String },

    #[error("At least one weekday is required")]
    EmptyWeekdaySet,

    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a missing field validation error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        ValidationError::MissingField {
            field: field.into(),
        }
    }

    /// Creates an unrecognized weekday error carrying the offending token.
    pub fn unrecognized_weekday(token: impl Into<String>) -> Self {
        ValidationError::UnrecognizedWeekday {
            token: token.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the request field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField { field } => field,
            ValidationError::InvalidFormat { field, .. } => field,
            ValidationError::UnrecognizedWeekday { .. } | ValidationError::EmptyWeekdaySet => {
                "weekdays"
            }
            ValidationError::InvalidDateRange { .. } => "end_date",
        }
    }

    /// Machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingField { .. } => ErrorCode::MissingField,
            ValidationError::UnrecognizedWeekday { .. } => ErrorCode::UnrecognizedWeekday,
            ValidationError::EmptyWeekdaySet => ErrorCode::EmptyWeekdaySet,
            ValidationError::InvalidDateRange { .. } => ErrorCode::InvalidDateRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    MissingField,
    UnrecognizedWeekday,
    EmptyWeekdaySet,
    InvalidDateRange,
    InvalidFormat,

    // Not found errors
    SessionNotFound,

    // Infrastructure errors
    DatabaseError,
    ExternalServiceError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::MissingField => "MISSING_FIELD",
            ErrorCode::UnrecognizedWeekday => "UNRECOGNIZED_WEEKDAY",
            ErrorCode::EmptyWeekdaySet => "EMPTY_WEEKDAY_SET",
            ErrorCode::InvalidDateRange => "INVALID_DATE_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::ExternalServiceError => "EXTERNAL_SERVICE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// Used at port boundaries (repositories, providers).
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a database error from any displayable cause.
    pub fn database(context: &str, cause: impl fmt::Display) -> Self {
        Self::new(ErrorCode::DatabaseError, format!("{}: {}", context, cause))
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
