//! The `!nr` command group.
//!
//! Turns a message into at most one mutation and one reply:
//!
//! 1. **Parse** (`parse`) - Prefix and group name, case-insensitive. Other `!` commands
//!    are ignored.
//! 2. **Preconditions** (`precondition`) - Guild context, then bot permissions.
//! 3. **Route** (`parse::route`) - Subcommand, aliases and argument count.
//! 4. **Run** (`service::notification_role`) - Guard pipeline of the subcommand.
//! 5. **Reply** (`reply`) - Success text, or the reply for the `CommandError`.
//!
//! `unsubscribe` additionally deletes the role after replying when only the bot still
//! holds it.

pub mod parse;
pub mod precondition;
pub mod reply;

#[cfg(test)]
mod test;

use crate::{
    data::platform::{GuildRolePlatform, ReplyChannel},
    error::command::CommandError,
    model::command::{Command, Invocation},
    service::notification_role::NotificationRoleService,
};

/// Handles a message that may invoke the command group.
///
/// Never fails: every error ends in the reply chosen by `reply::error_reply`, and
/// unexpected errors are additionally logged.
///
/// # Arguments
/// - `ctx` - Guild state and reply channel of the message
/// - `invocation` - Guild and author of the message
/// - `content` - Message content
pub async fn dispatch<C>(ctx: &C, invocation: &Invocation, content: &str)
where
    C: GuildRolePlatform + ReplyChannel + ?Sized,
{
    if let Err(error) = execute(ctx, invocation, content).await {
        on_command_error(ctx, invocation, error).await;
    }
}

async fn execute<C>(ctx: &C, invocation: &Invocation, content: &str) -> Result<(), CommandError>
where
    C: GuildRolePlatform + ReplyChannel + ?Sized,
{
    let Some(raw) = parse::parse_message(content)? else {
        return Ok(());
    };

    precondition::check_all(ctx, invocation).await?;

    let command = parse::route(raw)?;

    tracing::debug!(
        "Running {} for user {} in guild {:?}",
        command.name(),
        invocation.author_id,
        invocation.guild_id
    );

    run(ctx, invocation, command).await
}

async fn run<C>(ctx: &C, invocation: &Invocation, command: Command) -> Result<(), CommandError>
where
    C: GuildRolePlatform + ReplyChannel + ?Sized,
{
    let service = NotificationRoleService::new(ctx);

    match command {
        Command::Add { role_name } => {
            let role = service.add(&role_name).await?;
            ctx.reply(reply::role_added_to_guild(&role)).await?;
        }
        Command::List => {
            let roles = service.list().await?;
            if let Some(list) = reply::notification_role_list(&roles) {
                ctx.reply(list).await?;
            }
        }
        Command::Subscribe { role_name } => {
            let role = service
                .subscribe(invocation.author_id, &role_name)
                .await?;
            ctx.reply(reply::role_added_to_member(&role)).await?;
        }
        Command::Unsubscribe { role_name } => {
            let role = service
                .unsubscribe(invocation.author_id, &role_name)
                .await?;
            let replied = ctx.reply(reply::role_removed_from_member(&role)).await;
            service.delete_if_orphaned(&role).await?;
            replied?;
        }
    }

    Ok(())
}

/// Replies to a failed invocation.
async fn on_command_error<C>(ctx: &C, invocation: &Invocation, error: CommandError)
where
    C: ReplyChannel + ?Sized,
{
    match &error {
        CommandError::NotFound => {
            tracing::debug!("Ignoring unknown command from user {}", invocation.author_id);
        }
        CommandError::Unexpected(e) => {
            tracing::error!(
                "Unexpected error handling command from user {} in guild {:?}: {}",
                invocation.author_id,
                invocation.guild_id,
                e
            );
        }
        CommandError::BotMissingPermissions(missing) => {
            tracing::warn!(
                "Missing permissions {:?} in guild {:?}",
                missing,
                invocation.guild_id
            );
        }
        CommandError::Guard(_) | CommandError::Usage(_) | CommandError::GuildRequired => {
            tracing::debug!("Command from user {} rejected: {}", invocation.author_id, error);
        }
    }

    let Some(reply) = reply::error_reply(&error) else {
        return;
    };

    if let Err(e) = ctx.reply(reply).await {
        tracing::error!("Failed to send error reply: {}", e);
    }
}
