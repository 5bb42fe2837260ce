//! Preconditions evaluated before any `!nr` subcommand runs.
//!
//! Preconditions are checked in order and the first failure ends the invocation. The
//! guild check runs first so direct messages never trigger a platform call.

use serenity::all::Permissions;

use crate::{
    data::platform::GuildRolePlatform,
    error::command::CommandError,
    model::{command::Invocation, role::GuildRole},
};

/// A requirement on the invocation context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precondition {
    /// The command must be sent in a guild channel.
    GuildOnly,
    /// The bot must hold these permissions at guild level.
    BotHasGuildPermissions(Permissions),
}

/// Permissions the bot needs to manage notification roles and answer commands.
pub fn required_permissions() -> Permissions {
    Permissions::MANAGE_ROLES | Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES
}

/// Preconditions of the `!nr` command group, in evaluation order.
pub fn preconditions() -> [Precondition; 2] {
    [
        Precondition::GuildOnly,
        Precondition::BotHasGuildPermissions(required_permissions()),
    ]
}

/// Computes a member's guild-level permissions from the roster.
///
/// The guild owner holds every permission. Otherwise combines the `@everyone` role (whose
/// ID equals the guild ID) with every role granted to the member, and administrator
/// implies every permission. Channel overwrites are not considered.
///
/// # Arguments
/// - `roster` - Guild roster
/// - `guild_id` - Discord guild ID
/// - `is_owner` - Whether the member owns the guild
/// - `member_role_ids` - Role IDs granted to the member
pub fn guild_permissions(
    roster: &[GuildRole],
    guild_id: u64,
    is_owner: bool,
    member_role_ids: &[u64],
) -> Permissions {
    if is_owner {
        return Permissions::all();
    }

    let permissions = roster
        .iter()
        .filter(|role| role.role_id == guild_id || member_role_ids.contains(&role.role_id))
        .fold(Permissions::empty(), |acc, role| acc | role.permissions);

    if permissions.contains(Permissions::ADMINISTRATOR) {
        Permissions::all()
    } else {
        permissions
    }
}

impl Precondition {
    /// Checks the precondition against the invocation.
    ///
    /// # Returns
    /// - `Ok(())` - The precondition holds
    /// - `Err(CommandError::GuildRequired)` - Sent outside a guild
    /// - `Err(CommandError::BotMissingPermissions)` - The bot lacks required permissions
    /// - `Err(CommandError::Unexpected)` - Reading the bot's roles failed
    pub async fn check<P>(&self, platform: &P, invocation: &Invocation) -> Result<(), CommandError>
    where
        P: GuildRolePlatform + ?Sized,
    {
        match self {
            Precondition::GuildOnly => match invocation.guild_id {
                Some(_) => Ok(()),
                None => Err(CommandError::GuildRequired),
            },
            Precondition::BotHasGuildPermissions(required) => {
                let guild_id = invocation.guild_id.ok_or(CommandError::GuildRequired)?;

                let bot_id = platform.bot_id();
                let roster = platform.roles().await?;
                let is_owner = platform.owner_id().await? == bot_id;
                let bot_role_ids = platform.member_role_ids(bot_id).await?;
                let granted = guild_permissions(&roster, guild_id, is_owner, &bot_role_ids);

                let missing = *required - granted;
                if missing.is_empty() {
                    Ok(())
                } else {
                    Err(CommandError::BotMissingPermissions(missing))
                }
            }
        }
    }
}

/// Checks every precondition of the command group in order.
///
/// # Returns
/// - `Ok(())` - All preconditions hold
/// - `Err(CommandError)` - The first failed precondition
pub async fn check_all<P>(platform: &P, invocation: &Invocation) -> Result<(), CommandError>
where
    P: GuildRolePlatform + ?Sized,
{
    for precondition in preconditions() {
        precondition.check(platform, invocation).await?;
    }

    Ok(())
}
