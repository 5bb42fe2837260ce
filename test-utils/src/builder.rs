use serenity::all::{Permissions, Role};
use std::collections::HashMap;

use crate::{
    context::{Failures, TestContext},
    serenity::create_test_role,
};

/// Default Discord guild ID for test guilds.
pub const TEST_GUILD_ID: u64 = 100000000000000000;
/// Default Discord user ID of the bot in test guilds.
pub const TEST_BOT_ID: u64 = 200000000000000000;
/// Role ID of the bot's integration role in test guilds.
pub const TEST_BOT_ROLE_ID: u64 = 300000000000000000;
/// Default Discord user ID of the guild owner in test guilds.
pub const TEST_OWNER_ID: u64 = 900000000000000000;

/// Builder for creating in-memory test guilds.
///
/// Provides a fluent interface for configuring the roster, member role grants and
/// injected failures of a guild. Every guild starts with an `@everyone` role and a
/// managed bot role holding the permissions set by `with_bot_permissions()` (by default
/// Manage Roles, View Channel and Send Messages).
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, serenity::create_test_notification_role};
///
/// let test = TestBuilder::new()
///     .with_role(create_test_notification_role(1, "Announcements", 1))
///     .with_bot_roles(&[1])
///     .with_member_roles(42, &[1])
///     .build();
/// ```
pub struct TestBuilder {
    guild_id: u64,
    bot_id: u64,
    owner_id: u64,
    bot_permissions: Permissions,
    everyone_permissions: Permissions,
    roles: Vec<Role>,
    member_roles: HashMap<u64, Vec<u64>>,
    failures: Failures,
}

impl TestBuilder {
    /// Creates a new test builder for an empty guild.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with default IDs and bot permissions
    pub fn new() -> Self {
        Self {
            guild_id: TEST_GUILD_ID,
            bot_id: TEST_BOT_ID,
            owner_id: TEST_OWNER_ID,
            bot_permissions: Permissions::MANAGE_ROLES
                | Permissions::VIEW_CHANNEL
                | Permissions::SEND_MESSAGES,
            everyone_permissions: Permissions::empty(),
            roles: Vec::new(),
            member_roles: HashMap::new(),
            failures: Failures::default(),
        }
    }

    /// Sets the permissions of the bot's managed integration role.
    pub fn with_bot_permissions(mut self, permissions: Permissions) -> Self {
        self.bot_permissions = permissions;
        self
    }

    /// Makes the bot the owner of the guild.
    pub fn with_bot_as_owner(mut self) -> Self {
        self.owner_id = self.bot_id;
        self
    }

    /// Sets the permissions of the guild's `@everyone` role.
    pub fn with_everyone_permissions(mut self, permissions: Permissions) -> Self {
        self.everyone_permissions = permissions;
        self
    }

    /// Adds a role to the guild roster.
    ///
    /// Roles are stored in the order they are added; consumers are expected to sort by
    /// position as Discord clients do.
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    /// Grants roles to a member, creating the member if needed.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID of the member
    /// - `role_ids` - Role IDs to grant
    pub fn with_member_roles(mut self, user_id: u64, role_ids: &[u64]) -> Self {
        let roles = self.member_roles.entry(user_id).or_default();
        for role_id in role_ids {
            if !roles.contains(role_id) {
                roles.push(*role_id);
            }
        }
        self
    }

    /// Grants roles to the bot in addition to its integration role.
    pub fn with_bot_roles(self, role_ids: &[u64]) -> Self {
        let bot_id = self.bot_id;
        self.with_member_roles(bot_id, role_ids)
    }

    /// Makes every roster and member read fail.
    pub fn fail_reads(mut self) -> Self {
        self.failures.reads = true;
        self
    }

    /// Makes every role creation fail.
    pub fn fail_role_creation(mut self) -> Self {
        self.failures.role_creation = true;
        self
    }

    /// Makes every role grant fail.
    pub fn fail_role_grant(mut self) -> Self {
        self.failures.role_grant = true;
        self
    }

    /// Makes every role deletion fail.
    pub fn fail_role_deletion(mut self) -> Self {
        self.failures.role_deletion = true;
        self
    }

    /// Makes every reply fail to send.
    pub fn fail_replies(mut self) -> Self {
        self.failures.replies = true;
        self
    }

    /// Builds the in-memory guild.
    ///
    /// Adds the `@everyone` role (ID equal to the guild ID, position 0) and the bot's
    /// integration role (granted to the bot) ahead of the configured roles.
    ///
    /// # Returns
    /// - `TestContext` - Guild ready for use by the code under test
    pub fn build(self) -> TestContext {
        let mut roles = vec![
            create_test_role(
                self.guild_id,
                "@everyone",
                0,
                false,
                self.everyone_permissions,
            ),
            create_test_role(
                TEST_BOT_ROLE_ID,
                "Notification Roles Bot",
                100,
                false,
                self.bot_permissions,
            ),
        ];
        roles.extend(self.roles);

        let mut member_roles = self.member_roles;
        let bot_roles = member_roles.entry(self.bot_id).or_default();
        if !bot_roles.contains(&TEST_BOT_ROLE_ID) {
            bot_roles.insert(0, TEST_BOT_ROLE_ID);
        }

        TestContext::new(
            self.guild_id,
            self.bot_id,
            self.owner_id,
            roles,
            member_roles,
            self.failures,
        )
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
