//! Notification role classification.

use crate::model::role::GuildRole;

/// Returns whether a role is a notification role.
///
/// A role is a notification role if 1) it is mentionable, 2) it grants no permissions at
/// all, and 3) the bot itself holds it. The third condition limits the bot to roles it
/// created through `add`, so it never grants, revokes or deletes roles managed by anyone
/// else even when they happen to be mentionable and permissionless.
///
/// A role from another guild never matches since the bot cannot hold it.
///
/// # Arguments
/// - `bot_role_ids` - Role IDs currently granted to the bot in the guild
/// - `role` - Candidate role
pub fn is_notification_role(bot_role_ids: &[u64], role: &GuildRole) -> bool {
    role.mentionable && role.permissions.is_empty() && bot_role_ids.contains(&role.role_id)
}
