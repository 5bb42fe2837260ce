//! Guard failures raised by the notification role pipeline.
//!
//! Each variant is an expected, data-driven rejection of a command. The display text of a
//! variant is the exact reply sent to the member, so guard failures never need further
//! formatting before being posted.

use thiserror::Error;

use crate::model::role::GuildRole;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GuardError {
    /// `add` was given a name or mention that already resolves to a role in the guild.
    #[error("Uh-oh...your guild already has the role {}!", .0.mention())]
    RoleFoundInGuild(GuildRole),

    /// Discord rejected the role creation request.
    ///
    /// # Fields
    /// - The role name as typed by the member
    #[error("Uh-oh...the role \"{0}\" could not be added to your guild!")]
    RoleNotAddedToGuild(String),

    /// The role argument did not resolve to any role in the guild.
    ///
    /// # Fields
    /// - The role argument as typed by the member
    #[error("Uh-oh...your guild does not have the role \"{0}\"!")]
    RoleNotFoundInGuild(String),

    /// The role exists but is not mentionable, carries permissions, or is not held by the bot.
    #[error("Uh-oh...the role {} is not a notification role!", .0.mention())]
    NotNotificationRole(GuildRole),

    /// `subscribe` was invoked by a member who already holds the role.
    #[error("Uh-oh...you already have the role {}!", .0.mention())]
    RoleFoundInMember(GuildRole),

    /// `unsubscribe` was invoked by a member who does not hold the role.
    #[error("Uh-oh...you don't have the role {}!", .0.mention())]
    RoleNotFoundInMember(GuildRole),

    /// Discord rejected granting the role to the member.
    #[error("Uh-oh...the role {} could not be added to you!", .0.mention())]
    RoleNotAddedToMember(GuildRole),
}
