//! Discord bot integration.
//!
//! This module connects the bot to Discord's gateway and forwards events to the command
//! group. The gateway client is created once at startup and runs until the process
//! exits; every message event is handled in its own task by Serenity, so concurrent
//! commands never share state inside the bot.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild and role information
//! - `GUILD_MESSAGES` - Receive command messages sent in guilds
//! - `DIRECT_MESSAGES` - Receive command messages sent directly, to answer that a guild is required
//! - `MESSAGE_CONTENT` - Read command text (privileged intent)
//! - `GUILD_MEMBERS` - List role holders when cleaning up roles (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` and `GUILD_MEMBERS` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
