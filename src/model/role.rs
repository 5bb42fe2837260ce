//! Discord guild role domain models.
//!
//! Provides the domain model for Discord roles within guilds, carrying exactly the role
//! attributes the notification role commands read: identity, display name, hierarchy
//! position, the mentionable flag and the permission set. Handles conversion from the
//! Serenity role objects returned by the Discord API.

use serenity::all::{Permissions, Role};
use std::cmp::Reverse;

/// Discord role within a guild.
///
/// Read fresh from Discord on every command invocation and never cached, since any of
/// its attributes may change between invocations.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRole {
    /// Discord role ID as a u64.
    pub role_id: u64,
    /// Role display name. Not guaranteed to be unique within the guild.
    pub name: String,
    /// Role position in the guild's role hierarchy (higher = more important).
    pub position: i64,
    /// Whether any member may mention the role.
    pub mentionable: bool,
    /// Permissions granted to holders of the role.
    pub permissions: Permissions,
}

impl GuildRole {
    /// Converts a Serenity role to a domain model at the platform boundary.
    ///
    /// # Arguments
    /// - `role` - Serenity role object as returned by the Discord API
    ///
    /// # Returns
    /// - `GuildRole` - Domain model with the attributes the bot reads
    pub fn from_role(role: &Role) -> Self {
        Self {
            role_id: role.id.get(),
            name: role.name.clone(),
            position: i64::from(role.position),
            mentionable: role.mentionable,
            permissions: role.permissions,
        }
    }

    /// Mention form of the role, e.g. `<@&123>`.
    pub fn mention(&self) -> String {
        format!("<@&{}>", self.role_id)
    }
}

/// Sorts a guild roster into Discord's native order.
///
/// `@everyone` (whose ID equals the guild ID) always sorts first. The remaining roles are
/// ordered by ascending position; among roles sharing a position the older role, with the
/// lower ID, ranks higher and therefore sorts later.
///
/// # Arguments
/// - `roles` - Roster to sort in place
/// - `guild_id` - Discord guild ID
pub fn sort_roster(roles: &mut [GuildRole], guild_id: u64) {
    roles.sort_by_key(|role| (role.role_id != guild_id, role.position, Reverse(role.role_id)));
}

/// Parameters for creating a guild role.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRoleParam {
    /// Display name of the new role.
    pub name: String,
    /// Whether members may mention the new role.
    pub mentionable: bool,
    /// Permissions granted to holders of the new role.
    pub permissions: Permissions,
}

impl CreateRoleParam {
    /// Parameters for a new notification role: mentionable with no permissions.
    ///
    /// # Arguments
    /// - `name` - Display name of the new role
    pub fn notification(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mentionable: true,
            permissions: Permissions::empty(),
        }
    }
}
