//! Interfaces to the Discord platform consumed by the command pipeline.
//!
//! The pipeline never talks to Serenity directly. It reads and mutates guild state through
//! `GuildRolePlatform` and answers the invoking message through `ReplyChannel`, which keeps
//! every guard check testable against the in-memory guild from `test-utils`.

use serenity::async_trait;

use crate::{
    error::AppError,
    model::{
        reply::Reply,
        role::{CreateRoleParam, GuildRole},
    },
};

/// Role state of the guild a command was invoked in.
///
/// Every read goes to the platform, implementations must not cache results across calls.
/// Each method is a single platform call that is never retried.
#[async_trait]
pub trait GuildRolePlatform: Send + Sync {
    /// Discord user ID of the bot itself.
    fn bot_id(&self) -> u64;

    /// Gets the guild roster in Discord's native order (see `model::role::sort_roster`).
    async fn roles(&self) -> Result<Vec<GuildRole>, AppError>;

    /// Gets the Discord user ID of the guild owner.
    async fn owner_id(&self) -> Result<u64, AppError>;

    /// Gets the role IDs currently granted to a member of the guild.
    async fn member_role_ids(&self, user_id: u64) -> Result<Vec<u64>, AppError>;

    /// Gets the user IDs of every member currently holding a role.
    async fn role_member_ids(&self, role_id: u64) -> Result<Vec<u64>, AppError>;

    /// Creates a role in the guild.
    async fn create_role(&self, param: CreateRoleParam) -> Result<GuildRole, AppError>;

    /// Grants a role to a member.
    async fn add_member_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError>;

    /// Revokes a role from a member.
    async fn remove_member_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError>;

    /// Deletes a role from the guild.
    async fn delete_role(&self, role_id: u64) -> Result<(), AppError>;
}

/// Reply channel bound to the message that invoked a command.
#[async_trait]
pub trait ReplyChannel: Send + Sync {
    /// Sends a reply referencing the invoking message.
    async fn reply(&self, reply: Reply) -> Result<(), AppError>;
}
