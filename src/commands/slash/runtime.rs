//! # Runtime Command
//!
//! Definition for /12, the one-shot 12-hour runtime limit.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0

use serenity::builder::CreateApplicationCommand;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_12_command()]
}

fn create_12_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("12")
        .description("Run the bot for 12 hours.")
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_runtime_commands() {
        let commands = create_commands();
        assert_eq!(commands.len(), 1);
    }
}
