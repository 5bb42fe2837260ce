use serenity::all::Permissions;
use thiserror::Error;

use crate::error::{guard::GuardError, AppError};

/// Every way a command invocation can end without its success reply.
///
/// Returned by the dispatcher rather than raised, and matched exhaustively by
/// `command::reply::error_reply` to produce at most one reply.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Expected rejection by one of the pipeline guards.
    #[error(transparent)]
    Guard(#[from] GuardError),

    /// The invocation did not match the command syntax.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// The command was sent outside of a guild, e.g. in a direct message.
    #[error("This command cannot be used in private messages.")]
    GuildRequired,

    /// The bot lacks guild-level permissions the command group requires.
    ///
    /// # Fields
    /// - The permissions that are missing
    #[error(
        "Bot requires {} permission(s) to run this command.",
        .0.get_permission_names().join(", ")
    )]
    BotMissingPermissions(Permissions),

    /// The message used the command prefix but named a command the bot does not have.
    ///
    /// Never replied to, other bots commonly share the `!` prefix.
    #[error("Command not found")]
    NotFound,

    /// Anything else, typically a Discord API failure.
    #[error(transparent)]
    Unexpected(#[from] AppError),
}

/// Syntax errors detected while routing a `!nr` invocation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UsageError {
    /// `!nr` was invoked on its own.
    #[error("Missing subcommand")]
    MissingSubcommand,

    /// `!nr <word>` where `<word>` is not a known subcommand.
    #[error("Unknown subcommand \"{0}\"")]
    UnknownSubcommand(String),

    /// A required argument was not supplied.
    ///
    /// # Fields
    /// - Name of the missing parameter
    #[error("{0} is a required argument that is missing.")]
    MissingArgument(&'static str),

    /// More arguments were supplied than the subcommand accepts.
    ///
    /// # Fields
    /// - Fully qualified name of the subcommand
    #[error("Too many arguments passed to {0}")]
    TooManyArguments(&'static str),
}
