//! # Revive Commands
//!
//! Definitions for the revive configuration surface:
//! /set-revive-role, /set-revive-channel, /activate-auto-revive,
//! /set-revive-interval, /check
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![
        create_set_revive_role_command(),
        create_set_revive_channel_command(),
        create_activate_auto_revive_command(),
        create_set_revive_interval_command(),
        create_check_command(),
    ]
}

fn create_set_revive_role_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("set-revive-role")
        .description("Set the role to be pinged for chat revival.")
        .create_option(|option| {
            option
                .name("role")
                .description("The role to be set for chat revival.")
                .kind(CommandOptionType::Role)
                .required(true)
        })
        .to_owned()
}

fn create_set_revive_channel_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("set-revive-channel")
        .description("Set the channel for chat revival messages.")
        .create_option(|option| {
            option
                .name("channel")
                .description("The channel to be set for chat revival.")
                .kind(CommandOptionType::Channel)
                .required(true)
        })
        .to_owned()
}

fn create_activate_auto_revive_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("activate-auto-revive")
        .description("Activate auto-revive messages.")
        .to_owned()
}

fn create_set_revive_interval_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("set-revive-interval")
        .description("Set the interval for auto-revive messages.")
        .create_option(|option| {
            option
                .name("interval")
                .description("Interval in minutes.")
                .kind(CommandOptionType::Integer)
                .required(true)
        })
        .to_owned()
}

fn create_check_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("check")
        .description("Check how much time is left until the next revive ping.")
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_revive_commands() {
        let commands = create_commands();
        assert_eq!(commands.len(), 5, "Should have 5 revive commands");
    }
}
