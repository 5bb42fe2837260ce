use serenity::all::{Context, Message};

use crate::{
    command::{self, parse::COMMAND_PREFIX},
    data::discord::DiscordCommandContext,
    model::command::Invocation,
};

/// Handle message creation in a channel
pub async fn handle_message(ctx: Context, message: Message) {
    // Never answer bots, including ourselves
    if message.author.bot {
        return;
    }

    if !message.content.starts_with(COMMAND_PREFIX) {
        return;
    }

    let invocation = Invocation {
        guild_id: message.guild_id.map(|guild_id| guild_id.get()),
        author_id: message.author.id.get(),
    };

    let bot_id = ctx.cache.current_user().id;
    let command_ctx = DiscordCommandContext::new(ctx.http.clone(), &message, bot_id);

    command::dispatch(&command_ctx, &invocation, &message.content).await;
}
