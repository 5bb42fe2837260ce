//! Message parsing and subcommand routing for the `!nr` command group.

use crate::{
    error::command::{CommandError, UsageError},
    model::command::{Command, RawCommand},
};

/// Prefix every command message starts with.
pub const COMMAND_PREFIX: &str = "!";

/// Name of the command group all subcommands live under.
pub const COMMAND_GROUP: &str = "nr";

/// Splits arguments on whitespace, keeping double-quoted spans together.
///
/// Quotes are removed from the resulting argument. An unterminated quote extends to the
/// end of the input. An empty pair of quotes yields an empty argument.
///
/// # Arguments
/// - `input` - Text following the command prefix
///
/// # Returns
/// - `Vec<String>` - Arguments in order
pub fn split_arguments(input: &str) -> Vec<String> {
    let mut arguments = Vec::new();
    let mut chars = input.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let Some(first) = chars.next() else {
            break;
        };

        let mut argument = String::new();
        if first == '"' {
            for c in chars.by_ref() {
                if c == '"' {
                    break;
                }
                argument.push(c);
            }
        } else {
            argument.push(first);
            while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                argument.push(c);
            }
        }

        arguments.push(argument);
    }

    arguments
}

/// Parses a message into the `!nr` command group.
///
/// # Arguments
/// - `content` - Full message content
///
/// # Returns
/// - `Ok(Some(RawCommand))` - The message invokes the command group
/// - `Ok(None)` - The message does not start with the command prefix
/// - `Err(CommandError::NotFound)` - The message names a command other than the group
pub fn parse_message(content: &str) -> Result<Option<RawCommand>, CommandError> {
    let Some(rest) = content.strip_prefix(COMMAND_PREFIX) else {
        return Ok(None);
    };

    let mut arguments = split_arguments(rest).into_iter();

    match arguments.next() {
        Some(group) if group.eq_ignore_ascii_case(COMMAND_GROUP) => Ok(Some(RawCommand {
            subcommand: arguments.next(),
            args: arguments.collect(),
        })),
        _ => Err(CommandError::NotFound),
    }
}

/// Routes a parsed invocation to a subcommand, checking its arity.
///
/// Subcommand names and their aliases (`sub`, `unsub`) are matched case-insensitively.
///
/// # Returns
/// - `Ok(Command)` - Routed subcommand with its arguments
/// - `Err(UsageError)` - Missing or unknown subcommand, or wrong number of arguments
pub fn route(raw: RawCommand) -> Result<Command, UsageError> {
    let Some(subcommand) = raw.subcommand else {
        return Err(UsageError::MissingSubcommand);
    };

    match subcommand.to_lowercase().as_str() {
        "add" => Ok(Command::Add {
            role_name: role_argument("nr add", raw.args)?,
        }),
        "list" => {
            if !raw.args.is_empty() {
                return Err(UsageError::TooManyArguments("nr list"));
            }
            Ok(Command::List)
        }
        "subscribe" | "sub" => Ok(Command::Subscribe {
            role_name: role_argument("nr subscribe", raw.args)?,
        }),
        "unsubscribe" | "unsub" => Ok(Command::Unsubscribe {
            role_name: role_argument("nr unsubscribe", raw.args)?,
        }),
        _ => Err(UsageError::UnknownSubcommand(subcommand)),
    }
}

/// Extracts the single role argument of a subcommand.
fn role_argument(command: &'static str, args: Vec<String>) -> Result<String, UsageError> {
    let mut args = args.into_iter();

    let role = args.next().ok_or(UsageError::MissingArgument("role_str"))?;
    if args.next().is_some() {
        return Err(UsageError::TooManyArguments(command));
    }

    Ok(role)
}
