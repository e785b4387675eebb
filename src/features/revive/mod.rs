//! # Revive Feature
//!
//! Recurring chat-revival pings: configuration state plus the repeating
//! scheduler that delivers them.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Guard activation so re-activation cannot spawn duplicate timers
//! - 1.0.0: Initial state + scheduler implementation

pub mod scheduler;
pub mod state;

pub use scheduler::ReviveScheduler;
pub use state::{
    ReviveConfig, ReviveState, DEFAULT_REVIVE_INTERVAL, MIN_REVIVE_INTERVAL_MINUTES,
    RUNNING_TIME_LIMIT,
};
