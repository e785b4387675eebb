use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use serenity::async_trait;
use serenity::model::application::interaction::{Interaction, InteractionResponseType};
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;
use tokio::sync::mpsc;

use revive::commands::{register_global_commands, register_guild_commands, CommandContext};
use revive::core::Config;
use revive::features::revive::{ReviveScheduler, ReviveState, RUNNING_TIME_LIMIT};
use revive::{CommandHandler, OwnerProvisioner, RuntimeLimiter};

struct Handler {
    command_handler: Arc<CommandHandler>,
    guild_id: Option<GuildId>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        // Provisioning failures are logged and swallowed, never fatal
        if let Err(e) = self.command_handler.handle_message(&ctx, &msg).await {
            error!("Error in owner provisioning handler: {e}");
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        // Guild commands for development (instant), global for production
        if let Some(guild_id) = self.guild_id {
            info!("🔧 Development mode: Registering commands for guild {guild_id}");
            if let Err(e) = register_guild_commands(&ctx, guild_id).await {
                error!("❌ Failed to register guild slash commands: {e}");
            } else {
                info!("✅ Successfully registered slash commands for guild {guild_id} (instant update)");
            }
        } else {
            info!("🌍 Production mode: Registering commands globally");
            if let Err(e) = register_global_commands(&ctx).await {
                error!("❌ Failed to register global slash commands: {e}");
            } else {
                info!("✅ Successfully registered slash commands globally (may take up to 1 hour to propagate)");
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::ApplicationCommand(command) = interaction {
            if let Err(e) = self
                .command_handler
                .handle_slash_command(&ctx, &command)
                .await
            {
                error!(
                    "Error handling slash command '{}': {}",
                    command.data.name, e
                );

                let _ = command
                    .create_interaction_response(&ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::ChannelMessageWithSource)
                            .interaction_response_data(|message| {
                                message.content(
                                    "❌ Sorry, I encountered an error processing your command. Please try again.",
                                )
                            })
                    })
                    .await;
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Revive Discord Bot...");

    let state = Arc::new(ReviveState::new());
    let scheduler = Arc::new(ReviveScheduler::new(state.clone()));

    // The runtime limiter signals this channel; the listener below tears the
    // gateway down, which makes client.start() return.
    let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
    let limiter = Arc::new(RuntimeLimiter::new(RUNNING_TIME_LIMIT, shutdown_tx));

    let context = CommandContext::new(state, scheduler, limiter, config.owner_user_id);
    let provisioner = OwnerProvisioner::new(
        config.owner_user_id,
        config.admin_trigger.clone(),
        config.admin_role_name.clone(),
    );
    let command_handler = CommandHandler::new(context, provisioner);

    let handler = Handler {
        command_handler: Arc::new(command_handler),
        guild_id: config.discord_guild_id,
    };

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            error!("This could indicate:");
            error!("  - Invalid bot token format");
            error!("  - Network issues reaching Discord API");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    // Shutdown listener for the one-shot 12-hour runtime limit
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if shutdown_rx.recv().await.is_some() {
            info!("Shutting down gateway after the 12-hour runtime limit");
            shard_manager.lock().await.shutdown_all().await;
        }
    });

    info!("Bot configured successfully. Connecting to Discord gateway...");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        error!("This could be due to:");
        error!("  - Invalid bot token");
        error!("  - Network connectivity issues");
        error!("  - Missing required permissions");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    info!("Gateway connection closed, bot stopped.");
    Ok(())
}
