//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0

use std::sync::Arc;

use serenity::model::id::UserId;

use crate::features::revive::{ReviveScheduler, ReviveState};
use crate::features::runtime::RuntimeLimiter;

/// Shared context for all command handlers.
///
/// Carries the core collaborators most handlers need:
/// - `ReviveState` for the mutable revive configuration
/// - `ReviveScheduler` for activation
/// - `RuntimeLimiter` for the one-shot 12-hour timer
/// - the owner identity for authorization
#[derive(Clone)]
pub struct CommandContext {
    pub state: Arc<ReviveState>,
    pub scheduler: Arc<ReviveScheduler>,
    pub limiter: Arc<RuntimeLimiter>,
    pub owner_id: UserId,
}

impl CommandContext {
    pub fn new(
        state: Arc<ReviveState>,
        scheduler: Arc<ReviveScheduler>,
        limiter: Arc<RuntimeLimiter>,
        owner_id: UserId,
    ) -> Self {
        Self {
            state,
            scheduler,
            limiter,
            owner_id,
        }
    }

    /// Whether the invoking user is the single authorized identity.
    pub fn is_owner(&self, user: UserId) -> bool {
        user == self.owner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn context() -> CommandContext {
        let state = Arc::new(ReviveState::new());
        let scheduler = Arc::new(ReviveScheduler::new(state.clone()));
        let (tx, _rx) = mpsc::channel(1);
        let limiter = Arc::new(RuntimeLimiter::new(Duration::from_secs(1), tx));
        CommandContext::new(state, scheduler, limiter, UserId(42))
    }

    #[test]
    fn test_is_owner() {
        let ctx = context();
        assert!(ctx.is_owner(UserId(42)));
        assert!(!ctx.is_owner(UserId(43)));
    }

    #[test]
    fn test_command_context_clone() {
        // CommandContext should be Clone for sharing across handlers
        fn assert_clone<T: Clone>() {}
        assert_clone::<CommandContext>();
    }
}
