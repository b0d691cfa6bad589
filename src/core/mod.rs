//! Core business logic layer
//!
//! Timer data, the points calculation, the storage and prompting traits and
//! the timer state machine built on them.

pub mod data;
pub mod operations;
pub mod traits;
