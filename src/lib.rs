//! Class Calendar - Recurring class sessions and their calendar.
//!
//! Publishes weekly classes with a date window and a set of weekdays, and
//! resolves which classes happen on a date, which days of a month have at
//! least one class, and which sessions have expired.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
