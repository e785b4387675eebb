//! Revive command handlers
//!
//! Handles: set-revive-role, set-revive-channel, activate-auto-revive,
//! set-revive-interval, check
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Reject re-activation instead of spawning a duplicate scheduler
//! - 1.0.0: Initial implementation

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use log::info;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::id::{ChannelId, RoleId};
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::handlers::respond;
use crate::commands::slash::{get_channel_option, get_integer_option, get_role_option};
use crate::core::{role_mention, ReviveError};

/// Handler for the revive configuration surface.
pub struct ReviveHandler;

#[async_trait]
impl SlashCommandHandler for ReviveHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &[
            "set-revive-role",
            "set-revive-channel",
            "activate-auto-revive",
            "set-revive-interval",
            "check",
        ]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        match command.data.name.as_str() {
            "set-revive-role" => self.handle_set_role(&ctx, serenity_ctx, command).await,
            "set-revive-channel" => self.handle_set_channel(&ctx, serenity_ctx, command).await,
            "activate-auto-revive" => self.handle_activate(&ctx, serenity_ctx, command).await,
            "set-revive-interval" => self.handle_set_interval(&ctx, serenity_ctx, command).await,
            "check" => self.handle_check(&ctx, serenity_ctx, command).await,
            _ => Ok(()),
        }
    }
}

impl ReviveHandler {
    /// Handle /set-revive-role. Stores the role unconditionally; no check
    /// that it is mentionable.
    async fn handle_set_role(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let role = get_role_option(&command.data.options, "role")
            .map(RoleId)
            .ok_or_else(|| anyhow::anyhow!("Missing role parameter"))?;

        ctx.state.set_role(role).await;

        respond(
            serenity_ctx,
            command,
            &format!("Revive role set to {}.", role_mention(role)),
            false,
        )
        .await?;

        info!("Revive role set to {role} by user {}", command.user.id);
        Ok(())
    }

    /// Handle /set-revive-channel. Stores the channel unconditionally.
    async fn handle_set_channel(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let channel = get_channel_option(&command.data.options, "channel")
            .map(ChannelId)
            .ok_or_else(|| anyhow::anyhow!("Missing channel parameter"))?;

        ctx.state.set_channel(channel).await;

        respond(
            serenity_ctx,
            command,
            &format!("Revive channel set to <#{channel}>."),
            false,
        )
        .await?;

        info!("Revive channel set to {channel} by user {}", command.user.id);
        Ok(())
    }

    /// Handle /activate-auto-revive. Requires both role and channel; starts
    /// at most one scheduler per process.
    async fn handle_activate(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        if !ctx.state.is_configured().await {
            respond(
                serenity_ctx,
                command,
                &ReviveError::PreconditionUnmet.to_string(),
                false,
            )
            .await?;
            return Ok(());
        }

        if ctx.scheduler.try_activate(serenity_ctx.http.clone()) {
            respond(serenity_ctx, command, "Auto-revive activated.", false).await?;
            info!("Auto-revive activated by user {}", command.user.id);
        } else {
            respond(serenity_ctx, command, "Auto-revive is already active.", false).await?;
        }
        Ok(())
    }

    /// Handle /set-revive-interval. Validation lives in the state; the prior
    /// value survives a rejection.
    async fn handle_set_interval(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let minutes = get_integer_option(&command.data.options, "interval")
            .ok_or_else(|| anyhow::anyhow!("Missing interval parameter"))?;

        match ctx.state.set_interval_minutes(minutes).await {
            Ok(_) => {
                respond(
                    serenity_ctx,
                    command,
                    &format!("Revive interval set to {minutes} minute(s)."),
                    false,
                )
                .await?;
                info!("Revive interval set to {minutes} minute(s) by user {}", command.user.id);
            }
            Err(e) => {
                respond(serenity_ctx, command, &e.to_string(), false).await?;
            }
        }
        Ok(())
    }

    /// Handle /check. Always succeeds, even before activation.
    async fn handle_check(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let minutes = ctx.state.remaining_minutes(Utc::now()).await;
        respond(
            serenity_ctx,
            command,
            &format!("Time until next revive ping: {minutes} minute(s)."),
            true,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revive_handler_commands() {
        let handler = ReviveHandler;
        let names = handler.command_names();

        assert!(names.contains(&"set-revive-role"));
        assert!(names.contains(&"set-revive-channel"));
        assert!(names.contains(&"activate-auto-revive"));
        assert!(names.contains(&"set-revive-interval"));
        assert!(names.contains(&"check"));
        assert_eq!(names.len(), 5);
    }
}
