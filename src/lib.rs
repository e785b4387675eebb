// Core layer - shared types, configuration and errors
pub mod core;

// Features layer - revive scheduler, runtime limit, owner provisioning
pub mod features;

// Application layer
pub mod command_handler;
pub mod commands;

// Re-export core config for convenience
pub use core::{Config, ReviveError};

// Re-export the top-level dispatcher
pub use command_handler::CommandHandler;

// Re-export feature items
pub use features::{OwnerProvisioner, ReviveScheduler, ReviveState, RuntimeLimiter};
