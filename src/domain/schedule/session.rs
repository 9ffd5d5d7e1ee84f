//! Session entity and its validated draft.
//!
//! A session is a recurring class: opaque display fields plus a closed date
//! window and the weekdays it meets on. Sessions are validated once, when a
//! [`SessionDraft`] is built from request fields, and are read-only after
//! that as far as the engine is concerned.

use serde::Serialize;

use crate::domain::foundation::{
    normalize_set, CalendarDate, SessionId, ValidationError, WeekdayLocale, WeekdaySet,
};

/// Raw, unvalidated session fields as they arrive from a request.
#[derive(Debug, Clone, Default)]
pub struct SessionFields {
    pub name: Option<String>,
    pub time_label: Option<String>,
    pub link: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub weekdays: Option<Vec<String>>,
}

/// Fully validated session contents, minus the identifier.
///
/// # Invariants
///
/// - `name`, `time_label`, `link` are not blank
/// - `start_date <= end_date`
/// - `weekdays` is non-empty and canonical
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDraft {
    name: String,
    time_label: String,
    link: String,
    start_date: CalendarDate,
    end_date: CalendarDate,
    weekdays: WeekdaySet,
}

impl SessionDraft {
    /// Builds a draft from already-typed values.
    ///
    /// # Errors
    ///
    /// Every violated invariant is reported, not only the first.
    pub fn new(
        name: String,
        time_label: String,
        link: String,
        start_date: CalendarDate,
        end_date: CalendarDate,
        weekdays: WeekdaySet,
    ) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();
        for (field, value) in [("name", &name), ("time_label", &time_label), ("link", &link)] {
            if value.trim().is_empty() {
                errors.push(ValidationError::missing_field(field));
            }
        }
        if let Err(e) = check_window(start_date, end_date) {
            errors.push(e);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            name,
            time_label,
            link,
            start_date,
            end_date,
            weekdays,
        })
    }

    /// Validates request fields, canonicalizing weekday names with `locale`.
    ///
    /// # Errors
    ///
    /// Returns every offending field: missing values, malformed dates,
    /// unrecognized or empty weekdays, and an inverted date window.
    pub fn parse(fields: SessionFields, locale: WeekdayLocale) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let name = required_text("name", fields.name, &mut errors);
        let time_label = required_text("time_label", fields.time_label, &mut errors);
        let link = required_text("link", fields.link, &mut errors);
        let start_date = required_date("start_date", fields.start_date, &mut errors);
        let end_date = required_date("end_date", fields.end_date, &mut errors);

        let weekdays = match fields.weekdays {
            None => {
                errors.push(ValidationError::missing_field("weekdays"));
                None
            }
            Some(names) => normalize_set(&names, locale)
                .map_err(|e| errors.push(e))
                .ok(),
        };

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if let Err(e) = check_window(start, end) {
                errors.push(e);
            }
        }

        match (name, time_label, link, start_date, end_date, weekdays) {
            (Some(name), Some(time_label), Some(link), Some(start_date), Some(end_date), Some(weekdays))
                if errors.is_empty() =>
            {
                Ok(Self {
                    name,
                    time_label,
                    link,
                    start_date,
                    end_date,
                    weekdays,
                })
            }
            _ => Err(errors),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time_label(&self) -> &str {
        &self.time_label
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn start_date(&self) -> CalendarDate {
        self.start_date
    }

    pub fn end_date(&self) -> CalendarDate {
        self.end_date
    }

    pub fn weekdays(&self) -> &WeekdaySet {
        &self.weekdays
    }
}

fn check_window(start: CalendarDate, end: CalendarDate) -> Result<(), ValidationError> {
    if start > end {
        return Err(ValidationError::InvalidDateRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(())
}

fn required_text(
    field: &str,
    value: Option<String>,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            errors.push(ValidationError::missing_field(field));
            None
        }
    }
}

fn required_date(
    field: &str,
    value: Option<String>,
    errors: &mut Vec<ValidationError>,
) -> Option<CalendarDate> {
    let Some(value) = value else {
        errors.push(ValidationError::missing_field(field));
        return None;
    };
    CalendarDate::parse_field(field, &value)
        .map_err(|e| errors.push(e))
        .ok()
}

/// A stored recurring class session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    id: SessionId,
    name: String,
    time_label: String,
    link: String,
    start_date: CalendarDate,
    end_date: CalendarDate,
    weekdays: WeekdaySet,
}

impl Session {
    /// Attaches a storage-assigned identifier to validated contents.
    pub fn new(id: SessionId, draft: SessionDraft) -> Self {
        Self {
            id,
            name: draft.name,
            time_label: draft.time_label,
            link: draft.link,
            start_date: draft.start_date,
            end_date: draft.end_date,
            weekdays: draft.weekdays,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time_label(&self) -> &str {
        &self.time_label
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn start_date(&self) -> CalendarDate {
        self.start_date
    }

    pub fn end_date(&self) -> CalendarDate {
        self.end_date
    }

    pub fn weekdays(&self) -> &WeekdaySet {
        &self.weekdays
    }

    /// Intersection of the session window with `[from, to]`, if any.
    pub fn window_within(
        &self,
        from: CalendarDate,
        to: CalendarDate,
    ) -> Option<(CalendarDate, CalendarDate)> {
        let start = self.start_date.max(from);
        let end = self.end_date.min(to);
        (start <= end).then_some((start, end))
    }

    /// Whether the session window shares at least one day with `[from, to]`.
    pub fn overlaps(&self, from: CalendarDate, to: CalendarDate) -> bool {
        self.window_within(from, to).is_some()
    }

    /// Whether the window ended strictly before `today`.
    pub fn is_expired(&self, today: CalendarDate) -> bool {
        self.end_date < today
    }
}
