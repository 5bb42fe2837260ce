use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Starts the Discord bot in a blocking manner
///
/// Creates the gateway client and runs it until shutdown. Gateway reconnects, rate
/// limiting and HTTP retries are handled by Serenity.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: &Config) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
