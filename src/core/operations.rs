//! Timer lifecycle
//!
//! `absent -> running (start) -> stopped (stop) -> absent (delete)`.
//! Uploading is orchestrated by the command layer on top of these steps.

use chrono::{DateTime, Duration, Local};
use tracing::debug;

use crate::core::data::{Timer, validate_time_format};
use crate::core::traits::TimerStore;
use crate::utils::clock::Clock;
use crate::utils::error::{AppError, AppResult};

/// Snapshot of a timer at the moment it was stopped
#[derive(Debug, Clone)]
pub struct StoppedTimer {
    pub timer: Timer,
    pub elapsed: Duration,
    pub points: f64,
}

pub struct TimerOperations {
    store: Box<dyn TimerStore>,
    clock: Box<dyn Clock>,
}

impl TimerOperations {
    pub fn new(store: Box<dyn TimerStore>, clock: Box<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    pub fn ensure_not_started(&self, slug: &str) -> AppResult<()> {
        if self.store.exists(slug)? {
            return Err(AppError::AlreadyStarted(slug.to_string()));
        }
        Ok(())
    }

    /// Create a running timer for `slug` with an already resolved format.
    pub fn start(&self, slug: &str, time_format: &str) -> AppResult<Timer> {
        validate_time_format(time_format)?;

        let timer = Timer::new(self.now(), time_format.to_string());
        self.store.create(slug, &timer)?;
        debug!(slug, time_format, "timer started");
        Ok(timer)
    }

    pub fn load(&self, slug: &str) -> AppResult<Timer> {
        self.store
            .load(slug)?
            .ok_or_else(|| AppError::NotStarted(slug.to_string()))
    }

    /// Stop a running timer, persisting the stop time.
    pub fn stop(&self, slug: &str) -> AppResult<StoppedTimer> {
        let mut timer = self.load(slug)?;
        if !timer.is_running() {
            return Err(AppError::AlreadyStopped(slug.to_string()));
        }

        let now = self.now();
        timer.stop = Some(now);
        let points = timer.points(now)?;
        let elapsed = timer.elapsed(now);

        self.store.save(slug, &timer)?;
        debug!(slug, points, "timer stopped");

        Ok(StoppedTimer {
            timer,
            elapsed,
            points,
        })
    }

    pub fn delete(&self, slug: &str) -> AppResult<()> {
        if !self.store.delete(slug)? {
            return Err(AppError::NotStarted(slug.to_string()));
        }
        debug!(slug, "timer deleted");
        Ok(())
    }

    pub fn elapsed(&self, timer: &Timer) -> Duration {
        timer.elapsed(self.now())
    }

    pub fn points(&self, timer: &Timer) -> AppResult<f64> {
        timer.points(self.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileTimerStore;
    use chrono::TimeZone;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Clone)]
    struct StepClock(Arc<Mutex<DateTime<Local>>>);

    impl StepClock {
        fn advance(&self, by: Duration) {
            let mut now = self.0.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for StepClock {
        fn now(&self) -> DateTime<Local> {
            *self.0.lock().unwrap()
        }
    }

    fn setup() -> (TempDir, StepClock, TimerOperations) {
        let dir = TempDir::new().unwrap();
        let start = Local.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();
        let clock = StepClock(Arc::new(Mutex::new(start)));
        let ops = TimerOperations::new(
            Box::new(FileTimerStore::new(dir.path())),
            Box::new(clock.clone()),
        );
        (dir, clock, ops)
    }

    #[test]
    fn test_start_twice_keeps_original_timer() {
        let (_dir, clock, ops) = setup();
        let first = ops.start("writing", "hours").unwrap();

        clock.advance(Duration::minutes(5));
        assert_eq!(ops.ensure_not_started("writing"), Err(AppError::AlreadyStarted("writing".to_string())));
        assert_eq!(ops.start("writing", "minutes"), Err(AppError::AlreadyStarted("writing".to_string())));

        assert_eq!(ops.load("writing").unwrap(), first);
    }

    #[test]
    fn test_start_rejects_unknown_format() {
        let (_dir, _clock, ops) = setup();
        assert!(matches!(ops.start("writing", "pages"), Err(AppError::InvalidInput(_))));
        assert_eq!(ops.load("writing"), Err(AppError::NotStarted("writing".to_string())));
    }

    #[test]
    fn test_stop_records_elapsed_and_points() {
        let (_dir, clock, ops) = setup();
        ops.start("writing", "hours").unwrap();
        clock.advance(Duration::minutes(90));

        let stopped = ops.stop("writing").unwrap();
        assert_eq!(stopped.elapsed, Duration::minutes(90));
        assert_eq!(stopped.points, 1.5);

        // Points are frozen once stopped
        clock.advance(Duration::hours(3));
        let timer = ops.load("writing").unwrap();
        assert_eq!(ops.points(&timer).unwrap(), 1.5);
        assert_eq!(ops.elapsed(&timer), Duration::minutes(90));
    }

    #[test]
    fn test_stop_state_errors() {
        let (_dir, _clock, ops) = setup();
        assert!(matches!(ops.stop("writing"), Err(AppError::NotStarted(_))));

        ops.start("writing", "minutes").unwrap();
        ops.stop("writing").unwrap();
        assert_eq!(
            ops.stop("writing").unwrap_err(),
            AppError::AlreadyStopped("writing".to_string())
        );
    }

    #[test]
    fn test_delete_in_any_state() {
        let (_dir, _clock, ops) = setup();
        assert!(matches!(ops.delete("writing"), Err(AppError::NotStarted(_))));

        ops.start("writing", "minutes").unwrap();
        ops.delete("writing").unwrap();
        assert!(matches!(ops.load("writing"), Err(AppError::NotStarted(_))));

        ops.start("writing", "minutes").unwrap();
        ops.stop("writing").unwrap();
        ops.delete("writing").unwrap();
        assert!(matches!(ops.load("writing"), Err(AppError::NotStarted(_))));
    }
}
