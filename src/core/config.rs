//! Environment-backed bot configuration
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Externalize owner id, provisioning trigger and role name
//! - 1.0.0: Initial creation with token and log level

use anyhow::{Context, Result};
use serenity::model::id::{GuildId, UserId};

/// Fallback message trigger for the owner provisioning handler.
const DEFAULT_ADMIN_TRIGGER: &str = "¡admin";

/// Fallback name for the elevated role the provisioning handler manages.
const DEFAULT_ADMIN_ROLE_NAME: &str = "Bot Operator";

/// Bot configuration loaded from environment variables (usually via `.env`).
///
/// The owner identity, provisioning trigger and role name are deliberately
/// configuration values rather than literals in the handlers.
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot token (`DISCORD_TOKEN`, required)
    pub discord_token: String,
    /// The single user allowed to run privileged commands
    /// (`OWNER_USER_ID`, required)
    pub owner_user_id: UserId,
    /// Guild for instant command registration in development
    /// (`DISCORD_GUILD_ID`, optional — global registration when unset)
    pub discord_guild_id: Option<GuildId>,
    /// Literal message body that triggers owner provisioning
    /// (`ADMIN_TRIGGER`, optional)
    pub admin_trigger: String,
    /// Name of the elevated role the provisioning handler ensures
    /// (`ADMIN_ROLE_NAME`, optional)
    pub admin_role_name: String,
    /// Default log filter (`LOG_LEVEL`, optional, defaults to `info`)
    pub log_level: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let discord_token =
            std::env::var("DISCORD_TOKEN").context("DISCORD_TOKEN must be set")?;

        let owner_user_id = std::env::var("OWNER_USER_ID")
            .context("OWNER_USER_ID must be set")?
            .parse::<u64>()
            .context("OWNER_USER_ID must be a numeric Discord user ID")
            .map(UserId)?;

        let discord_guild_id = match std::env::var("DISCORD_GUILD_ID") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .context("DISCORD_GUILD_ID must be a numeric Discord guild ID")
                    .map(GuildId)?,
            ),
            Err(_) => None,
        };

        let admin_trigger = std::env::var("ADMIN_TRIGGER")
            .unwrap_or_else(|_| DEFAULT_ADMIN_TRIGGER.to_string());
        let admin_role_name = std::env::var("ADMIN_ROLE_NAME")
            .unwrap_or_else(|_| DEFAULT_ADMIN_ROLE_NAME.to_string());
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            discord_token,
            owner_user_id,
            discord_guild_id,
            admin_trigger,
            admin_role_name,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test fn so concurrent env mutation can't race between tests.
    #[test]
    fn test_from_env_round_trip() {
        std::env::set_var("DISCORD_TOKEN", "test-token");
        std::env::set_var("OWNER_USER_ID", "123456789");
        std::env::remove_var("DISCORD_GUILD_ID");
        std::env::remove_var("ADMIN_TRIGGER");
        std::env::remove_var("ADMIN_ROLE_NAME");
        std::env::remove_var("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.discord_token, "test-token");
        assert_eq!(config.owner_user_id, UserId(123456789));
        assert!(config.discord_guild_id.is_none());
        assert_eq!(config.admin_trigger, DEFAULT_ADMIN_TRIGGER);
        assert_eq!(config.admin_role_name, DEFAULT_ADMIN_ROLE_NAME);
        assert_eq!(config.log_level, "info");

        // Non-numeric owner id is a hard error
        std::env::set_var("OWNER_USER_ID", "not-a-number");
        assert!(Config::from_env().is_err());

        std::env::set_var("OWNER_USER_ID", "123456789");
        std::env::set_var("DISCORD_GUILD_ID", "987654321");
        std::env::set_var("ADMIN_TRIGGER", "!elevate");
        let config = Config::from_env().unwrap();
        assert_eq!(config.discord_guild_id, Some(GuildId(987654321)));
        assert_eq!(config.admin_trigger, "!elevate");
    }
}
