//! Weekday value objects and the boundary normalizer.
//!
//! Weekday names arrive as free text in whatever language the instructor
//! uses. They are canonicalized exactly once, when a session is created or
//! updated; everything downstream works on [`Weekday`] values only.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// One of the seven calendar weekdays.
///
/// Ordered Monday first. Serialized in canonical lowercase English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Canonical storage name.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Parses a canonical storage name. No case folding, no locales.
    pub fn from_canonical(name: &str) -> Option<Weekday> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.canonical_name() == name)
    }

    /// Days elapsed since the Monday of the same week (0..=6).
    pub fn days_from_monday(&self) -> u32 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }

    /// Forward distance in days from `self` to the next `target` (0..=6).
    pub fn days_until(&self, target: Weekday) -> u32 {
        (target.days_from_monday() + 7 - self.days_from_monday()) % 7
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Language in which weekday names are accepted at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeekdayLocale {
    #[default]
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "en")]
    English,
}

impl FromStr for WeekdayLocale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" => Ok(WeekdayLocale::Spanish),
            "en" => Ok(WeekdayLocale::English),
            other => Err(ValidationError::invalid_format(
                "locale",
                format!("unsupported locale '{}'", other),
            )),
        }
    }
}

// Lowercased names per locale. Accented Spanish names also accept their
// unaccented spelling.
const SPANISH_NAMES: &[(&str, Weekday)] = &[
    ("lunes", Weekday::Monday),
    ("martes", Weekday::Tuesday),
    ("miércoles", Weekday::Wednesday),
    ("miercoles", Weekday::Wednesday),
    ("jueves", Weekday::Thursday),
    ("viernes", Weekday::Friday),
    ("sábado", Weekday::Saturday),
    ("sabado", Weekday::Saturday),
    ("domingo", Weekday::Sunday),
];

const ENGLISH_NAMES: &[(&str, Weekday)] = &[
    ("monday", Weekday::Monday),
    ("tuesday", Weekday::Tuesday),
    ("wednesday", Weekday::Wednesday),
    ("thursday", Weekday::Thursday),
    ("friday", Weekday::Friday),
    ("saturday", Weekday::Saturday),
    ("sunday", Weekday::Sunday),
];

impl WeekdayLocale {
    fn names(&self) -> &'static [(&'static str, Weekday)] {
        match self {
            WeekdayLocale::Spanish => SPANISH_NAMES,
            WeekdayLocale::English => ENGLISH_NAMES,
        }
    }
}

/// Canonicalizes a single weekday name.
///
/// The name is trimmed and case-folded, then matched against the locale's
/// names. Canonical English names are accepted in every locale so stored
/// values can be re-submitted unchanged.
///
/// # Errors
///
/// - `UnrecognizedWeekday` carrying the original token
pub fn normalize(name: &str, locale: WeekdayLocale) -> Result<Weekday, ValidationError> {
    let folded = name.trim().to_lowercase();

    locale
        .names()
        .iter()
        .chain(ENGLISH_NAMES.iter())
        .find(|(candidate, _)| *candidate == folded)
        .map(|(_, day)| *day)
        .ok_or_else(|| ValidationError::unrecognized_weekday(name))
}

/// Canonicalizes a list of weekday names into a set.
///
/// # Errors
///
/// - `UnrecognizedWeekday` for the first name that does not match
/// - `EmptyWeekdaySet` if no names were given
pub fn normalize_set<I, S>(names: I, locale: WeekdayLocale) -> Result<WeekdaySet, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let days = names
        .into_iter()
        .map(|name| normalize(name.as_ref(), locale))
        .collect::<Result<Vec<_>, _>>()?;

    WeekdaySet::new(days)
}

/// Non-empty set of weekdays on which a session meets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct WeekdaySet(BTreeSet<Weekday>);

impl WeekdaySet {
    /// Builds a set, collapsing duplicates.
    ///
    /// # Errors
    ///
    /// - `EmptyWeekdaySet` if `days` is empty
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Result<Self, ValidationError> {
        let set: BTreeSet<Weekday> = days.into_iter().collect();
        if set.is_empty() {
            return Err(ValidationError::EmptyWeekdaySet);
        }
        Ok(Self(set))
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0.contains(&day)
    }

    /// Iterates Monday to Sunday.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical names, Monday first. This is the stored form.
    pub fn canonical_names(&self) -> Vec<String> {
        self.iter().map(|day| day.canonical_name().to_string()).collect()
    }
}

impl TryFrom<Vec<Weekday>> for WeekdaySet {
    type Error = ValidationError;

    fn try_from(days: Vec<Weekday>) -> Result<Self, Self::Error> {
        WeekdaySet::new(days)
    }
}

impl From<WeekdaySet> for Vec<Weekday> {
    fn from(set: WeekdaySet) -> Self {
        set.0.into_iter().collect()
    }
}
