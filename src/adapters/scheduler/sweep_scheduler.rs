//! SweepScheduler - Runs the expiry sweep once a day.
//!
//! Sleeps until the next configured wall-clock time in the reference
//! timezone, runs the sweep, and repeats.
//!
//! ## Configuration
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `timezone` | `America/Bogota` | Zone the run time is read in |
//! | `run_at` | 00:05 | Local time of day to sweep |
//!
//! ## Graceful Shutdown
//!
//! The loop exits as soon as the shutdown signal flips to `true` or its
//! sender is dropped. A sweep already in progress finishes first.

use chrono::{DateTime, Duration as ChronoDuration, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use crate::application::{SweepExpiredSessionsHandler, SweepResult};

/// Configuration for the SweepScheduler.
#[derive(Debug, Clone, Copy)]
pub struct SweepSchedulerConfig {
    pub timezone: Tz,
    pub run_at: NaiveTime,
}

impl Default for SweepSchedulerConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::America::Bogota,
            run_at: NaiveTime::from_hms_opt(0, 5, 0).unwrap_or_default(),
        }
    }
}

/// Background service that sweeps expired sessions daily.
pub struct SweepScheduler {
    handler: Arc<SweepExpiredSessionsHandler>,
    config: SweepSchedulerConfig,
}

impl SweepScheduler {
    pub fn new(handler: Arc<SweepExpiredSessionsHandler>, config: SweepSchedulerConfig) -> Self {
        Self { handler, config }
    }

    /// Run until the shutdown signal is received.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        loop {
            let now = Utc::now();
            let next = next_run_after(now, self.config.timezone, self.config.run_at);
            let wait = (next - now).to_std().unwrap_or(Duration::ZERO);

            tracing::debug!(next_run = %next, "Sweep scheduled");

            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::info!("Sweep scheduler stopping");
                        return;
                    }
                }

                _ = time::sleep(wait) => {
                    self.run_once().await;
                }
            }
        }
    }

    /// Run a single sweep, logging instead of propagating failures.
    pub async fn run_once(&self) -> Option<SweepResult> {
        match self.handler.handle().await {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::error!(error = %e, "Scheduled sweep failed");
                None
            }
        }
    }
}

/// First instant strictly after `now` whose local time in `tz` is `at`.
///
/// Days on which `at` does not exist locally (DST gap) are skipped; when it
/// occurs twice the earlier instant is used.
pub fn next_run_after(now: DateTime<Utc>, tz: Tz, at: NaiveTime) -> DateTime<Utc> {
    let local_today = now.with_timezone(&tz).date_naive();

    (0..=7)
        .filter_map(|offset| local_today.checked_add_signed(ChronoDuration::days(offset)))
        .filter_map(|day| tz.from_local_datetime(&day.and_time(at)).earliest())
        .map(|instant| instant.with_timezone(&Utc))
        .find(|instant| *instant > now)
        .unwrap_or_else(|| now + ChronoDuration::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, InMemorySessionRepository};
    use crate::domain::foundation::CalendarDate;
    use crate::domain::schedule::test_support::draft;
    use crate::ports::SessionRepository;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn next_run_later_today() {
        // 2024-01-10 03:00 in Bogotá (UTC-5).
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).unwrap();
        let next = next_run_after(now, chrono_tz::America::Bogota, hm(6, 30));

        assert_eq!(next, Utc.with_ymd_and_hms(2024, 1, 10, 11, 30, 0).unwrap());
    }

    #[test]
    fn next_run_rolls_to_tomorrow_once_passed() {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).unwrap();
        let next = next_run_after(now, chrono_tz::America::Bogota, hm(0, 5));

        assert_eq!(next, Utc.with_ymd_and_hms(2024, 1, 11, 5, 5, 0).unwrap());
    }

    #[test]
    fn exact_run_time_schedules_the_next_day() {
        let now = Utc.with_ymd_and_hms(2024, 1, 11, 5, 5, 0).unwrap();
        let next = next_run_after(now, chrono_tz::America::Bogota, hm(0, 5));

        assert_eq!(next, Utc.with_ymd_and_hms(2024, 1, 12, 5, 5, 0).unwrap());
    }

    #[test]
    fn skips_nonexistent_local_time() {
        // 02:30 does not exist in New York on 2024-03-10.
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 5, 0, 0).unwrap();
        let next = next_run_after(now, chrono_tz::America::New_York, hm(2, 30));

        assert_eq!(next, Utc.with_ymd_and_hms(2024, 3, 11, 6, 30, 0).unwrap());
    }

    fn scheduler(repo: Arc<InMemorySessionRepository>, today: &str) -> SweepScheduler {
        let clock = Arc::new(FixedClock::new(today.parse::<CalendarDate>().unwrap()));
        let handler = Arc::new(SweepExpiredSessionsHandler::new(repo, clock));
        SweepScheduler::new(handler, SweepSchedulerConfig::default())
    }

    #[tokio::test]
    async fn run_once_sweeps_expired_sessions() {
        let repo = Arc::new(InMemorySessionRepository::new());
        repo.insert(draft("2024-01-01", "2024-01-31", &["monday"])).await.unwrap();

        let result = scheduler(repo.clone(), "2024-02-01").run_once().await.unwrap();

        assert_eq!(result.deleted, 1);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn run_stops_on_shutdown_signal() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let scheduler = scheduler(repo, "2024-02-01");
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move { scheduler.run(shutdown_rx).await });

        tokio::time::sleep(Duration::from_millis(20)).await;
        shutdown_tx.send(true).unwrap();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap();
    }

    #[test]
    fn config_defaults_are_reasonable() {
        let config = SweepSchedulerConfig::default();

        assert_eq!(config.timezone, chrono_tz::America::Bogota);
        assert_eq!(config.run_at, hm(0, 5));
    }
}
