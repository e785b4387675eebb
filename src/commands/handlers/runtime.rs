//! Runtime limit command handler
//!
//! Handles: 12
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::handlers::respond;

/// Handler for the one-shot 12-hour runtime limit.
pub struct RuntimeHandler;

#[async_trait]
impl SlashCommandHandler for RuntimeHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["12"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        // One-shot gate first; no new timer when already claimed
        if !ctx.state.try_enter_12_hour_mode().await {
            respond(
                serenity_ctx,
                command,
                "The bot is already running for 12 hours. It will stop automatically after the time limit.",
                true,
            )
            .await?;
            return Ok(());
        }

        respond(
            serenity_ctx,
            command,
            "The bot will run for the next 12 hours and stop automatically.",
            true,
        )
        .await?;

        ctx.limiter.arm();
        info!("12-hour runtime limit armed by user {}", command.user.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_handler_commands() {
        let handler = RuntimeHandler;
        assert_eq!(handler.command_names(), &["12"]);
    }
}
