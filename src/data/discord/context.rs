//! Serenity-backed command context.
//!
//! `DiscordCommandContext` implements the platform interfaces for a single message event
//! using Discord's HTTP API. A new context is created for every message, so nothing read
//! through it outlives the invocation.

use serenity::{
    all::{
        CreateEmbed, CreateMessage, EditRole, GuildId, Message, MessageReference, RoleId, UserId,
    },
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::{
    data::platform::{GuildRolePlatform, ReplyChannel},
    error::AppError,
    model::{
        reply::Reply,
        role::{sort_roster, CreateRoleParam, GuildRole},
    },
};

/// Reason attached to every role mutation in the guild's audit log.
const AUDIT_LOG_REASON: &str = "Notification Roles Bot command";

/// Maximum number of members Discord returns per member list page.
const MEMBER_PAGE_LIMIT: u64 = 1000;

/// Maximum length of an embed field name accepted by Discord.
const EMBED_FIELD_NAME_LIMIT: usize = 256;

/// Discord state and reply channel for one invoking message.
pub struct DiscordCommandContext<'a> {
    /// Discord HTTP client shared with the gateway client.
    http: Arc<Http>,
    /// The message that invoked the command.
    message: &'a Message,
    /// Discord user ID of the bot.
    bot_id: UserId,
}

impl<'a> DiscordCommandContext<'a> {
    /// Creates a context for the given message.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client
    /// - `message` - Message that invoked the command
    /// - `bot_id` - Discord user ID of the bot
    pub fn new(http: Arc<Http>, message: &'a Message, bot_id: UserId) -> Self {
        Self {
            http,
            message,
            bot_id,
        }
    }

    /// Gets the guild the message was sent in.
    ///
    /// # Returns
    /// - `Ok(GuildId)` - Guild of the invoking message
    /// - `Err(AppError::InternalError)` - The message was sent outside a guild; the guild
    ///   precondition should have rejected it before any platform call
    fn guild_id(&self) -> Result<GuildId, AppError> {
        self.message.guild_id.ok_or_else(|| {
            AppError::InternalError(format!(
                "Message {} has no guild for a guild-only platform call",
                self.message.id
            ))
        })
    }
}

#[async_trait]
impl GuildRolePlatform for DiscordCommandContext<'_> {
    fn bot_id(&self) -> u64 {
        self.bot_id.get()
    }

    async fn roles(&self) -> Result<Vec<GuildRole>, AppError> {
        let guild_id = self.guild_id()?;

        let mut roles: Vec<GuildRole> = self
            .http
            .get_guild_roles(guild_id)
            .await?
            .iter()
            .map(GuildRole::from_role)
            .collect();
        sort_roster(&mut roles, guild_id.get());

        Ok(roles)
    }

    async fn owner_id(&self) -> Result<u64, AppError> {
        let guild_id = self.guild_id()?;

        let guild = self.http.get_guild(guild_id).await?;

        Ok(guild.owner_id.get())
    }

    async fn member_role_ids(&self, user_id: u64) -> Result<Vec<u64>, AppError> {
        let guild_id = self.guild_id()?;

        let member = self.http.get_member(guild_id, UserId::new(user_id)).await?;

        Ok(member.roles.iter().map(|role_id| role_id.get()).collect())
    }

    /// Pages through the full member list, which requires the `GUILD_MEMBERS` intent.
    async fn role_member_ids(&self, role_id: u64) -> Result<Vec<u64>, AppError> {
        let guild_id = self.guild_id()?;
        let role_id = RoleId::new(role_id);

        let mut holders = Vec::new();
        let mut after = None;

        loop {
            let page = self
                .http
                .get_guild_members(guild_id, Some(MEMBER_PAGE_LIMIT), after)
                .await?;

            holders.extend(
                page.iter()
                    .filter(|member| member.roles.contains(&role_id))
                    .map(|member| member.user.id.get()),
            );

            match page.last() {
                Some(last) if page.len() as u64 == MEMBER_PAGE_LIMIT => {
                    after = Some(last.user.id.get());
                }
                _ => break,
            }
        }

        Ok(holders)
    }

    async fn create_role(&self, param: CreateRoleParam) -> Result<GuildRole, AppError> {
        let guild_id = self.guild_id()?;

        let builder = EditRole::new()
            .name(param.name)
            .mentionable(param.mentionable)
            .permissions(param.permissions)
            .audit_log_reason(AUDIT_LOG_REASON);

        let role = guild_id.create_role(&self.http, builder).await?;

        Ok(GuildRole::from_role(&role))
    }

    async fn add_member_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError> {
        let guild_id = self.guild_id()?;

        self.http
            .add_member_role(
                guild_id,
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(AUDIT_LOG_REASON),
            )
            .await?;

        Ok(())
    }

    async fn remove_member_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError> {
        let guild_id = self.guild_id()?;

        self.http
            .remove_member_role(
                guild_id,
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(AUDIT_LOG_REASON),
            )
            .await?;

        Ok(())
    }

    async fn delete_role(&self, role_id: u64) -> Result<(), AppError> {
        let guild_id = self.guild_id()?;

        self.http
            .delete_role(guild_id, RoleId::new(role_id), Some(AUDIT_LOG_REASON))
            .await?;

        Ok(())
    }
}

#[async_trait]
impl ReplyChannel for DiscordCommandContext<'_> {
    async fn reply(&self, reply: Reply) -> Result<(), AppError> {
        let embed = match reply {
            Reply::Description(text) => CreateEmbed::new().description(text),
            Reply::Field { name, value } => {
                let name: String = name.chars().take(EMBED_FIELD_NAME_LIMIT).collect();
                CreateEmbed::new().field(name, value, false)
            }
        };

        let message = CreateMessage::new()
            .embed(embed)
            .reference_message(MessageReference::from((
                self.message.channel_id,
                self.message.id,
            )));

        self.message
            .channel_id
            .send_message(&self.http, message)
            .await?;

        Ok(())
    }
}
