//! Command-path error taxonomy
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//! - **Toggleable**: false

use thiserror::Error;

/// Errors a command handler turns into a user-visible reply.
///
/// The `Display` text is the reply body, so variants carry the exact wording
/// sent back to the invoker. Transport failures against the Discord API are
/// not part of this taxonomy; they surface as `serenity::Error` and are
/// logged and swallowed at the point of occurrence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviveError {
    /// A privileged command was invoked by someone other than the owner.
    #[error("You do not have permission to use this command.")]
    PermissionDenied,

    /// Activation was requested before both role and channel were set.
    #[error("Please set both the revive role and channel first.")]
    PreconditionUnmet,

    /// A command argument failed validation; the message explains the bound.
    #[error("{0}")]
    InvalidArgument(String),
}
