//! Background jobs driven by wall-clock time.

mod sweep_scheduler;

pub use sweep_scheduler::{next_run_after, SweepScheduler, SweepSchedulerConfig};
