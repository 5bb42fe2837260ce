//! Notification role guard pipeline.
//!
//! `NotificationRoleService` implements the four `!nr` commands as ordered guard checks.
//! Each command reads the guild state it needs fresh from the platform, stops at the first
//! failed guard with a `GuardError`, and issues at most one mutation. Failed guards never
//! touch guild state.

use serenity::utils::parse_role_mention;

use crate::{
    data::platform::GuildRolePlatform,
    error::{command::CommandError, guard::GuardError, AppError},
    model::role::{CreateRoleParam, GuildRole},
    service::predicate::is_notification_role,
};

/// Discord snowflakes written out as plain numbers have 15 to 20 digits.
const SNOWFLAKE_DIGITS: std::ops::RangeInclusive<usize> = 15..=20;

/// Finds a role in a roster from a member-supplied argument.
///
/// The argument is matched as a role mention (`<@&id>`), then as a bare role ID, then by
/// exact, case-sensitive name. A mention or ID that names no role in the roster does not
/// fall back to a name match. When several roles share the name, the first in roster
/// order wins.
///
/// # Arguments
/// - `roles` - Guild roster in native order
/// - `role_str` - Argument as typed by the member
///
/// # Returns
/// - `Some(GuildRole)` - The matching role
/// - `None` - No role matches
pub fn find_role(roles: &[GuildRole], role_str: &str) -> Option<GuildRole> {
    let role_id = parse_role_mention(role_str)
        .map(|role_id| role_id.get())
        .or_else(|| parse_snowflake(role_str));

    let role = match role_id {
        Some(role_id) => roles.iter().find(|role| role.role_id == role_id),
        None => roles.iter().find(|role| role.name == role_str),
    };

    role.cloned()
}

fn parse_snowflake(value: &str) -> Option<u64> {
    if !SNOWFLAKE_DIGITS.contains(&value.len()) || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<u64>().ok()
}

pub struct NotificationRoleService<'a, P: ?Sized> {
    platform: &'a P,
}

impl<'a, P: GuildRolePlatform + ?Sized> NotificationRoleService<'a, P> {
    /// Creates a new service instance.
    ///
    /// # Arguments
    /// - `platform` - Guild role state of the invoking guild
    pub fn new(platform: &'a P) -> Self {
        Self { platform }
    }

    /// Resolves a member-supplied argument to a role of the invoking guild.
    ///
    /// Not finding a role is not an error. Failing to read the roster is, so a Discord
    /// outage is reported as a bug rather than as "no such role".
    ///
    /// # Returns
    /// - `Ok(Some(GuildRole))` - The argument names a role in the guild
    /// - `Ok(None)` - No role matches the argument
    /// - `Err(AppError)` - The roster could not be read
    pub async fn resolve_role(&self, role_str: &str) -> Result<Option<GuildRole>, AppError> {
        let roles = self.platform.roles().await?;
        Ok(find_role(&roles, role_str))
    }

    /// Gets the role IDs currently granted to the bot.
    async fn bot_role_ids(&self) -> Result<Vec<u64>, AppError> {
        self.platform.member_role_ids(self.platform.bot_id()).await
    }

    /// Creates a notification role and grants it to the bot.
    ///
    /// If the bot cannot grant itself the new role, the role is left in the guild without
    /// being a notification role; running `add` again reports it as existing.
    ///
    /// # Arguments
    /// - `role_name` - Name of the new role
    ///
    /// # Returns
    /// - `Ok(GuildRole)` - The created role
    /// - `Err(GuardError::RoleFoundInGuild)` - The name already resolves to a role
    /// - `Err(GuardError::RoleNotAddedToGuild)` - Discord rejected the creation
    /// - `Err(CommandError::Unexpected)` - Roster read or the bot's self-grant failed
    pub async fn add(&self, role_name: &str) -> Result<GuildRole, CommandError> {
        if let Some(role) = self.resolve_role(role_name).await? {
            return Err(GuardError::RoleFoundInGuild(role).into());
        }

        let role = match self
            .platform
            .create_role(CreateRoleParam::notification(role_name))
            .await
        {
            Ok(role) => role,
            Err(e) => {
                tracing::warn!("Failed to create role \"{}\": {}", role_name, e);
                return Err(GuardError::RoleNotAddedToGuild(role_name.to_string()).into());
            }
        };

        self.platform
            .add_member_role(self.platform.bot_id(), role.role_id)
            .await?;

        tracing::info!("Added notification role {} ({})", role.name, role.role_id);

        Ok(role)
    }

    /// Gets the guild's notification roles in native roster order.
    ///
    /// # Returns
    /// - `Ok(Vec<GuildRole>)` - Notification roles, possibly empty
    /// - `Err(AppError)` - The roster or the bot's roles could not be read
    pub async fn list(&self) -> Result<Vec<GuildRole>, AppError> {
        let roles = self.platform.roles().await?;
        let bot_role_ids = self.bot_role_ids().await?;

        Ok(roles
            .into_iter()
            .filter(|role| is_notification_role(&bot_role_ids, role))
            .collect())
    }

    /// Resolves an argument to a role and checks it is a notification role.
    async fn resolve_notification_role(&self, role_str: &str) -> Result<GuildRole, CommandError> {
        let Some(role) = self.resolve_role(role_str).await? else {
            return Err(GuardError::RoleNotFoundInGuild(role_str.to_string()).into());
        };

        let bot_role_ids = self.bot_role_ids().await?;
        if !is_notification_role(&bot_role_ids, &role) {
            return Err(GuardError::NotNotificationRole(role).into());
        }

        Ok(role)
    }

    /// Grants a notification role to a member.
    ///
    /// # Arguments
    /// - `member_id` - Discord user ID of the invoking member
    /// - `role_str` - Role argument as typed by the member
    ///
    /// # Returns
    /// - `Ok(GuildRole)` - The role now held by the member
    /// - `Err(GuardError::RoleNotFoundInGuild)` - No role matches the argument
    /// - `Err(GuardError::NotNotificationRole)` - The role fails the notification role check
    /// - `Err(GuardError::RoleFoundInMember)` - The member already holds the role
    /// - `Err(GuardError::RoleNotAddedToMember)` - Discord rejected the grant
    pub async fn subscribe(&self, member_id: u64, role_str: &str) -> Result<GuildRole, CommandError> {
        let role = self.resolve_notification_role(role_str).await?;

        let member_role_ids = self.platform.member_role_ids(member_id).await?;
        if member_role_ids.contains(&role.role_id) {
            return Err(GuardError::RoleFoundInMember(role).into());
        }

        if let Err(e) = self.platform.add_member_role(member_id, role.role_id).await {
            tracing::warn!(
                "Failed to add role {} to member {}: {}",
                role.role_id,
                member_id,
                e
            );
            return Err(GuardError::RoleNotAddedToMember(role).into());
        }

        tracing::info!("Subscribed member {} to role {}", member_id, role.role_id);

        Ok(role)
    }

    /// Revokes a notification role from a member.
    ///
    /// Does not clean up the role; call `delete_if_orphaned` once the member has been told.
    ///
    /// # Arguments
    /// - `member_id` - Discord user ID of the invoking member
    /// - `role_str` - Role argument as typed by the member
    ///
    /// # Returns
    /// - `Ok(GuildRole)` - The role the member no longer holds
    /// - `Err(GuardError::RoleNotFoundInGuild)` - No role matches the argument
    /// - `Err(GuardError::NotNotificationRole)` - The role fails the notification role check
    /// - `Err(GuardError::RoleNotFoundInMember)` - The member does not hold the role
    /// - `Err(CommandError::Unexpected)` - A read or the revoke failed
    pub async fn unsubscribe(
        &self,
        member_id: u64,
        role_str: &str,
    ) -> Result<GuildRole, CommandError> {
        let role = self.resolve_notification_role(role_str).await?;

        let member_role_ids = self.platform.member_role_ids(member_id).await?;
        if !member_role_ids.contains(&role.role_id) {
            return Err(GuardError::RoleNotFoundInMember(role).into());
        }

        self.platform
            .remove_member_role(member_id, role.role_id)
            .await?;

        tracing::info!(
            "Unsubscribed member {} from role {}",
            member_id,
            role.role_id
        );

        Ok(role)
    }

    /// Deletes a notification role once the bot is its only holder.
    ///
    /// Role holders are re-read from Discord rather than taken from the role fetched
    /// before the revoke. Concurrent unsubscribes may both skip or both attempt the
    /// delete; the cleanup is best effort.
    ///
    /// # Arguments
    /// - `role` - Role a member just unsubscribed from
    ///
    /// # Returns
    /// - `Ok(true)` - The role was deleted
    /// - `Ok(false)` - Other members still hold the role
    /// - `Err(AppError)` - Reading the holders or deleting the role failed
    pub async fn delete_if_orphaned(&self, role: &GuildRole) -> Result<bool, AppError> {
        let holders = self.platform.role_member_ids(role.role_id).await?;

        if holders != [self.platform.bot_id()] {
            return Ok(false);
        }

        self.platform.delete_role(role.role_id).await?;

        tracing::info!(
            "Deleted notification role {} ({}) with no remaining subscribers",
            role.name,
            role.role_id
        );

        Ok(true)
    }
}
