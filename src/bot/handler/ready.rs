//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.

use serenity::all::{Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// This event fires once per bot connection after successful authentication and
/// initial gateway handshake. It indicates the bot is now online and ready to
/// process commands.
///
/// # Arguments
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);
}
