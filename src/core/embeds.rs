//! Revive embed builders for Discord responses
//!
//! Shared embed construction for the revive ping payload, kept next to the
//! other presentation helpers so the scheduler stays free of builder code.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0

use serenity::builder::CreateEmbed;
use serenity::model::id::RoleId;
use serenity::model::Timestamp;

/// Accent color for revive embeds.
pub const REVIVE_EMBED_COLOR: u32 = 0x3498DB;

/// Mention string for a role, usable in both content and embed text.
pub fn role_mention(role: RoleId) -> String {
    format!("<@&{}>", role.0)
}

/// Body text for the revive ping embed.
pub fn revive_description(role: RoleId, interval_minutes: u64) -> String {
    format!(
        "{} Time to revive the chat! Next revive in {} minutes.",
        role_mention(role),
        interval_minutes
    )
}

/// Build the "Chat Revive" embed: title, role mention + interval in the
/// description, accent color, current timestamp.
pub fn revive_embed(role: RoleId, interval_minutes: u64) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed.title("Chat Revive");
    embed.description(revive_description(role, interval_minutes));
    embed.color(REVIVE_EMBED_COLOR);
    embed.timestamp(Timestamp::now());
    embed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_mention_format() {
        assert_eq!(role_mention(RoleId(42)), "<@&42>");
    }

    #[test]
    fn test_revive_description_contains_role_and_minutes() {
        let text = revive_description(RoleId(99), 1);
        assert!(text.contains("<@&99>"));
        assert!(text.contains("1 minutes"));
    }

    #[test]
    fn test_revive_embed_builds_successfully() {
        // CreateEmbed is opaque — if it builds without panic, it's correct
        let _embed = revive_embed(RoleId(1), 60);
    }
}
