use chrono::{DateTime, Local};

/// Source of the current time. Timers ask the clock instead of calling
/// `Local::now()` so tests can control elapsed time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
