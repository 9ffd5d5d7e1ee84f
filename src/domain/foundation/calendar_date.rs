//! Calendar date and month value objects.
//!
//! A `CalendarDate` is a year/month/day triple with no time-of-day and no
//! timezone. Weekday derivation and range checks are pure calendar
//! arithmetic and never depend on the process clock or offset.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ValidationError, Weekday};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest and latest years accepted from the boundary.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// A calendar day, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from its components.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the triple is not a real calendar day
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::invalid_format(
                "date",
                format!("year {} out of range", year),
            ));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "date",
                    format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day),
                )
            })
    }

    /// Parses a `YYYY-MM-DD` string, attributing failures to `field`.
    ///
    /// Only the exact four-two-two digit shape is accepted. Signed, padded
    /// or unpadded variants are rejected, and the year must fall within
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn parse_field(field: &str, value: &str) -> Result<Self, ValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::missing_field(field));
        }

        let (year, month, day) = split_iso_date(value).ok_or_else(|| {
            ValidationError::invalid_format(field, format!("'{}' is not a YYYY-MM-DD date", value))
        })?;

        Self::from_ymd(year, month, day).map_err(|e| match e {
            ValidationError::InvalidFormat { reason, .. } => {
                ValidationError::invalid_format(field, format!("'{}': {}", value, reason))
            }
            other => other,
        })
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// 1-based day of the year.
    pub fn ordinal(&self) -> u32 {
        self.0.ordinal()
    }

    /// Day of the week of this date.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday().into()
    }

    /// The following day, or `None` past the end of the representable range.
    pub fn next_day(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Shifts by whole days. `None` if the result is unrepresentable.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(Duration::days(days)).map(Self)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &CalendarDate) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }
}

/// Splits `dddd-dd-dd` into its numeric components.
fn split_iso_date(value: &str) -> Option<(i32, u32, u32)> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_only = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_only {
        return None;
    }

    let year = value[0..4].parse().ok()?;
    let month = value[5..7].parse().ok()?;
    let day = value[8..10].parse().ok()?;
    Some((year, month, day))
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse_field("date", &value).map_err(serde::de::Error::custom)
    }
}

impl FromStr for CalendarDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_field("date", s)
    }
}

/// A calendar month, used to scope month views and highlight queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    /// # Errors
    ///
    /// - `InvalidFormat` if `month` is outside 1..=12 or `year` out of range
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::invalid_format(
                "month",
                format!("month must be between 1 and 12, got {}", month),
            ));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::invalid_format(
                "year",
                format!("year must be between {} and {}, got {}", MIN_YEAR, MAX_YEAR, year),
            ));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> CalendarDate {
        // Components were validated in `new`.
        CalendarDate(NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default())
    }

    pub fn last_day(&self) -> CalendarDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|first_of_next| first_of_next.pred_opt())
            .unwrap_or_default();
        CalendarDate(last)
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
