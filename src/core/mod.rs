//! # Core Module
//!
//! Core domain types, configuration, and error handling for the revive bot.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Add embeds module with revive payload builders
//! - 1.1.0: Add command error taxonomy
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod embeds;
pub mod error;

// Re-export commonly used items
pub use config::Config;
pub use embeds::{revive_description, revive_embed, role_mention, REVIVE_EMBED_COLOR};
pub use error::ReviveError;
