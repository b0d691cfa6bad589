//! Core trait definitions
//!
//! The command layer only talks to storage and the terminal through these
//! traits, so it can be driven without a real config directory or TTY.

use crate::core::data::Timer;
use crate::utils::error::AppResult;

/// Keyed storage for timers, one record per goal slug.
pub trait TimerStore: Send + Sync {
    /// Whether a timer exists for `slug`
    fn exists(&self, slug: &str) -> AppResult<bool>;

    /// Load the timer for `slug`, `None` when absent
    fn load(&self, slug: &str) -> AppResult<Option<Timer>>;

    /// Store a new timer. Fails with `AlreadyStarted` if one is present,
    /// without touching the existing record.
    fn create(&self, slug: &str, timer: &Timer) -> AppResult<()>;

    /// Overwrite the timer for `slug`
    fn save(&self, slug: &str, timer: &Timer) -> AppResult<()>;

    /// Remove the timer for `slug`. Returns false when there was none.
    fn delete(&self, slug: &str) -> AppResult<bool>;
}

/// Interactive questions asked by commands.
pub trait Prompter: Send + Sync {
    /// Ask a yes/no question
    fn confirm(&self, question: &str) -> AppResult<bool>;

    /// Read a value without echoing it
    fn secret(&self, label: &str) -> AppResult<String>;
}
