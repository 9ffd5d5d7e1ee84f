//! Schedule configuration: reference timezone, locale, and sweep timing.

use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::Deserialize;

use crate::domain::foundation::WeekdayLocale;

use super::error::ValidationError;

const SWEEP_TIME_FORMAT: &str = "%H:%M";

/// Schedule configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// IANA timezone that defines "today"
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Locale for weekday names and reminder text (`es` or `en`)
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Local time of the daily sweep, `HH:MM`
    #[serde(default = "default_sweep_at")]
    pub sweep_at: String,

    /// Run the daily sweep in the background
    #[serde(default = "default_sweep_enabled")]
    pub sweep_enabled: bool,
}

impl ScheduleConfig {
    pub fn tz(&self) -> Result<Tz, ValidationError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ValidationError::UnknownTimezone(self.timezone.clone()))
    }

    pub fn weekday_locale(&self) -> Result<WeekdayLocale, ValidationError> {
        self.locale
            .parse::<WeekdayLocale>()
            .map_err(|_| ValidationError::UnsupportedLocale(self.locale.clone()))
    }

    pub fn sweep_time(&self) -> Result<NaiveTime, ValidationError> {
        NaiveTime::parse_from_str(self.sweep_at.trim(), SWEEP_TIME_FORMAT)
            .map_err(|_| ValidationError::InvalidSweepTime(self.sweep_at.clone()))
    }

    /// Validate schedule configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.tz()?;
        self.weekday_locale()?;
        self.sweep_time()?;
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            locale: default_locale(),
            sweep_at: default_sweep_at(),
            sweep_enabled: default_sweep_enabled(),
        }
    }
}

fn default_timezone() -> String {
    "America/Bogota".to_string()
}

fn default_locale() -> String {
    "es".to_string()
}

fn default_sweep_at() -> String {
    "00:05".to_string()
}

fn default_sweep_enabled() -> bool {
    true
}
