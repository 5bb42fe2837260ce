//! Reply text for command outcomes.
//!
//! Success replies are built from the role the command acted on. Failures are mapped by
//! `error_reply`, which matches every `CommandError` variant so each failure class has an
//! explicit presentation.

use crate::{
    error::command::CommandError,
    model::{reply::Reply, role::GuildRole},
};

pub const GUILD_CONTEXT_REQUIRED_ERROR: &str =
    "Uh-oh...this command is only valid in a guild context!";
pub const SYNTAX: &str = "Syntax: !nr {list | {add | sub[scribe] | unsub[scribe]} ROLE}";
pub const UNHANDLED_EXCEPTION: &str = "It looks like you found a bug in Notification Roles Bot. If you would like to help us out, please file an issue on [GitHub](https://github.com/erickyeagle/notification-roles-bot/issues). Thank you!";

pub fn role_added_to_guild(role: &GuildRole) -> Reply {
    Reply::Description(format!(
        "The role {} has been added to your guild!",
        role.mention()
    ))
}

pub fn role_added_to_member(role: &GuildRole) -> Reply {
    Reply::Description(format!("The role {} has been added to you!", role.mention()))
}

pub fn role_removed_from_member(role: &GuildRole) -> Reply {
    Reply::Description(format!(
        "The role {} has been removed from you!",
        role.mention()
    ))
}

/// Lists notification role mentions joined by ", ".
///
/// # Returns
/// - `Some(Reply)` - At least one role to list
/// - `None` - No notification roles; the list command stays silent
pub fn notification_role_list(roles: &[GuildRole]) -> Option<Reply> {
    if roles.is_empty() {
        return None;
    }

    let mentions: Vec<String> = roles.iter().map(GuildRole::mention).collect();
    Some(Reply::Description(mentions.join(", ")))
}

/// Maps a failed invocation to the reply shown to the member.
///
/// # Returns
/// - `Some(Reply)` - Reply to send
/// - `None` - The failure is ignored silently
pub fn error_reply(error: &CommandError) -> Option<Reply> {
    match error {
        CommandError::NotFound => None,
        CommandError::Usage(_) => Some(Reply::Description(SYNTAX.to_string())),
        CommandError::GuildRequired => Some(Reply::Description(
            GUILD_CONTEXT_REQUIRED_ERROR.to_string(),
        )),
        CommandError::Guard(guard) => Some(Reply::Description(guard.to_string())),
        CommandError::BotMissingPermissions(_) | CommandError::Unexpected(_) => {
            Some(Reply::Field {
                name: error.to_string(),
                value: UNHANDLED_EXCEPTION.to_string(),
            })
        }
    }
}
