//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CLASS_CALENDAR` prefix and nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use class_calendar::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod database;
mod error;
mod quotes;
mod schedule;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use quotes::QuotesConfig;
pub use schedule::ScheduleConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration. When absent, sessions are kept in memory.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Reference timezone, locale, and sweep timing
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Quote service for reminders
    #[serde(default)]
    pub quotes: QuotesConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CLASS_CALENDAR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CLASS_CALENDAR__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CLASS_CALENDAR__DATABASE__URL=...` -> `database.url = ...`
    /// - `CLASS_CALENDAR__SCHEDULE__TIMEZONE=America/Lima` -> `schedule.timezone`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CLASS_CALENDAR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section. Production
    /// deployments must configure a database.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        match &self.database {
            Some(database) => database.validate()?,
            None if self.is_production() => {
                return Err(ValidationError::DatabaseRequiredInProduction)
            }
            None => {}
        }
        self.schedule.validate()?;
        self.quotes.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
