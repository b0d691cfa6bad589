//! Core data structures for goal timers
//!
//! Timers are the only entity this tool persists; goals and datapoints
//! belong to the remote service and only pass through.

use crate::utils::error::{AppError, AppResult};
use crate::utils::format::is_valid_strftime;
use crate::utils::time_format;
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: i64 = 86_400;

/// Unit a goal counts in, derived from the timer's time format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Hours,
    Minutes,
}

impl TimeUnit {
    /// `hour` wins over `minute` when a format mentions both.
    pub fn from_format(format: &str) -> Option<Self> {
        if format.contains("hour") {
            Some(TimeUnit::Hours)
        } else if format.contains("minute") {
            Some(TimeUnit::Minutes)
        } else {
            None
        }
    }

    fn seconds_per_point(self) -> f64 {
        match self {
            TimeUnit::Hours => 3600.0,
            TimeUnit::Minutes => 60.0,
        }
    }
}

/// Check a time format before a timer is created with it.
pub fn validate_time_format(format: &str) -> AppResult<TimeUnit> {
    if format.trim().is_empty() {
        return Err(AppError::InvalidInput("time format cannot be empty".to_string()));
    }
    if !is_valid_strftime(format) {
        return Err(AppError::InvalidInput(format!(
            "'{}' is not a valid strftime pattern",
            format
        )));
    }
    TimeUnit::from_format(format).ok_or_else(|| {
        AppError::InvalidInput(format!(
            "time format '{}' must mention 'hour' or 'minute'",
            format
        ))
    })
}

/// A local timer for one goal. No `stop` means the timer is running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    #[serde(with = "time_format")]
    pub start: DateTime<Local>,
    pub time_format: String,
    #[serde(
        default,
        with = "time_format::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub stop: Option<DateTime<Local>>,
}

impl Timer {
    pub fn new(start: DateTime<Local>, time_format: String) -> Self {
        Self {
            start,
            time_format,
            stop: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.stop.is_none()
    }

    /// The instant elapsed time is measured to: `stop` once set, else `now`.
    pub fn end(&self, now: DateTime<Local>) -> DateTime<Local> {
        self.stop.unwrap_or(now)
    }

    pub fn elapsed(&self, now: DateTime<Local>) -> Duration {
        self.end(now) - self.start
    }

    /// Points earned so far, in the unit named by the time format.
    ///
    /// Only the seconds-within-a-day part of the elapsed time counts: whole
    /// days are dropped, so a 25 hour session scores 1 hour. Negative spans
    /// normalise the same way (a second before `start` reads as 23:59:59).
    pub fn points(&self, now: DateTime<Local>) -> AppResult<f64> {
        let unit = TimeUnit::from_format(&self.time_format).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "cannot compute points for time format '{}'",
                self.time_format
            ))
        })?;

        let seconds = day_seconds(&self.elapsed(now));
        Ok(seconds as f64 / unit.seconds_per_point())
    }
}

/// Whole seconds of `elapsed` after removing whole days, always in `[0, 86400)`.
fn day_seconds(elapsed: &Duration) -> i64 {
    let whole_seconds = match elapsed.num_microseconds() {
        Some(micros) => micros.div_euclid(1_000_000),
        None => elapsed.num_seconds(),
    };
    whole_seconds.rem_euclid(SECONDS_PER_DAY)
}

/// A goal as reported by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub slug: String,
    pub title: String,
    pub summary: String,
}

/// A value to append to a goal.
#[derive(Debug, Clone, PartialEq)]
pub struct Datapoint {
    pub slug: String,
    pub value: f64,
    /// Unix seconds.
    pub timestamp: i64,
    pub comment: String,
}
