//! Error types and command reply classification.
//!
//! This module provides the bot's error hierarchy. `AppError` is the top-level error for
//! startup and platform operations, while `CommandError` is the closed set of outcomes a
//! command invocation can fail with. Every `CommandError` variant is matched exhaustively
//! by the reply layer in `command::reply`, so adding a variant forces a decision about how
//! it is presented to the invoking member.

pub mod command;
pub mod config;
pub mod guard;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates errors raised while starting the bot or talking to the Discord API. Inside a
/// command invocation these surface as `CommandError::Unexpected` and are reported to the
/// member as a bug.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Fatal at startup, the bot cannot connect without a token.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Covers gateway failures, rejected HTTP requests and
    /// missing permissions reported by Discord mid-flight.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Internal error with custom message.
    ///
    /// Indicates unexpected behavior inside the bot such as a platform call made from a
    /// context that has no guild.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
