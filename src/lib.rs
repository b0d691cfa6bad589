//! Beetimer - time work sessions and send them to Beeminder
//!
//! A timer is started for a goal, stopped later, and the elapsed time is
//! converted to hours or minutes and uploaded as a datapoint.

pub mod cli;
pub mod config;
pub mod core;
pub mod manager;
pub mod remote;
pub mod storage;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    data::{Datapoint, Goal, TimeUnit, Timer},
    operations::{StoppedTimer, TimerOperations},
    traits::{Prompter, TimerStore},
};
pub use remote::{Connector, GoalService};
pub use utils::error::{AppError, AppResult};
