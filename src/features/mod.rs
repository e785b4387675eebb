//! # Features Layer
//!
//! Feature modules of the revive bot: the revive scheduler and its state,
//! the one-shot runtime limit, and owner provisioning.

pub mod provisioning;
pub mod revive;
pub mod runtime;

pub use provisioning::OwnerProvisioner;
pub use revive::{ReviveConfig, ReviveScheduler, ReviveState};
pub use runtime::RuntimeLimiter;
