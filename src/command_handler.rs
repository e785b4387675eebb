//! Top-level command dispatcher
//!
//! Owns the handler registry, enforces single-owner authorization before
//! dispatch, and routes raw guild messages to the provisioning handler.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use anyhow::Result;
use log::{info, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::handlers::{create_all_handlers, respond};
use crate::commands::registry::CommandRegistry;
use crate::core::ReviveError;
use crate::features::provisioning::OwnerProvisioner;

#[derive(Clone)]
pub struct CommandHandler {
    context: Arc<CommandContext>,
    registry: CommandRegistry,
    provisioner: Arc<OwnerProvisioner>,
}

impl CommandHandler {
    pub fn new(context: CommandContext, provisioner: OwnerProvisioner) -> Self {
        let mut registry = CommandRegistry::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }

        CommandHandler {
            context: Arc::new(context),
            registry,
            provisioner: Arc::new(provisioner),
        }
    }

    /// A command is privileged unless it is `check` or the 12-hour trigger.
    fn is_privileged(name: &str) -> bool {
        !matches!(name, "check" | "12")
    }

    /// Decide whether an invocation may proceed to dispatch. Denials happen
    /// before any handler runs, so a denied command performs no mutation.
    fn authorize(&self, name: &str, invoker: serenity::model::id::UserId) -> Result<(), ReviveError> {
        if Self::is_privileged(name) && !self.context.is_owner(invoker) {
            Err(ReviveError::PermissionDenied)
        } else {
            Ok(())
        }
    }

    /// Authorize and dispatch a slash command to its registered handler.
    pub async fn handle_slash_command(
        &self,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let request_id = Uuid::new_v4();
        let name = command.data.name.as_str();
        info!("[{request_id}] /{name} invoked by user {}", command.user.id);

        if let Err(denied) = self.authorize(name, command.user.id) {
            warn!(
                "[{request_id}] Unauthorized /{name} attempt by user {}",
                command.user.id
            );
            respond(serenity_ctx, command, &denied.to_string(), true).await?;
            return Ok(());
        }

        match self.registry.get(name) {
            Some(handler) => {
                handler
                    .handle(Arc::clone(&self.context), serenity_ctx, command)
                    .await
            }
            None => respond(serenity_ctx, command, "Unknown command.", false).await,
        }
    }

    /// Route a raw message to the owner provisioning handler.
    pub async fn handle_message(&self, serenity_ctx: &Context, msg: &Message) -> Result<()> {
        self.provisioner.handle_message(serenity_ctx, msg).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::revive::{ReviveScheduler, ReviveState};
    use crate::features::runtime::RuntimeLimiter;
    use serenity::model::id::UserId;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn handler_with_state() -> (CommandHandler, Arc<ReviveState>) {
        let state = Arc::new(ReviveState::new());
        let scheduler = Arc::new(ReviveScheduler::new(state.clone()));
        let (tx, _rx) = mpsc::channel(1);
        let limiter = Arc::new(RuntimeLimiter::new(Duration::from_secs(1), tx));
        let context = CommandContext::new(state.clone(), scheduler, limiter, UserId(42));
        let provisioner =
            OwnerProvisioner::new(UserId(42), "¡admin".to_string(), "Bot Operator".to_string());
        (CommandHandler::new(context, provisioner), state)
    }

    #[tokio::test]
    async fn test_unauthorized_privileged_command_denied_without_mutation() {
        let (handler, state) = handler_with_state();

        assert_eq!(
            handler.authorize("set-revive-role", UserId(7)),
            Err(ReviveError::PermissionDenied)
        );
        // Denial happens before dispatch, so the configuration is untouched
        let config = state.snapshot().await;
        assert!(config.revive_role.is_none());
        assert!(config.revive_channel.is_none());

        // Owner passes; unprivileged commands pass for anyone
        assert_eq!(handler.authorize("set-revive-role", UserId(42)), Ok(()));
        assert_eq!(handler.authorize("check", UserId(7)), Ok(()));
        assert_eq!(handler.authorize("12", UserId(7)), Ok(()));
    }

    #[test]
    fn test_privileged_classification() {
        for name in [
            "set-revive-role",
            "set-revive-channel",
            "activate-auto-revive",
            "set-revive-interval",
        ] {
            assert!(CommandHandler::is_privileged(name), "{name} is privileged");
        }
        assert!(!CommandHandler::is_privileged("check"));
        assert!(!CommandHandler::is_privileged("12"));
        // Unknown names fail closed
        assert!(CommandHandler::is_privileged("something-else"));
    }
}
