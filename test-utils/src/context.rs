use serenity::all::{Permissions, Role};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::{error::TestError, serenity::create_test_role};

/// Mutation requested from the in-memory guild.
///
/// Recorded before the configured failure is applied, so tests observe every call the
/// bot attempted, successful or not.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    CreateRole {
        name: String,
        mentionable: bool,
        permissions: Permissions,
    },
    AddMemberRole {
        user_id: u64,
        role_id: u64,
    },
    RemoveMemberRole {
        user_id: u64,
        role_id: u64,
    },
    DeleteRole {
        role_id: u64,
    },
}

/// Failures the in-memory guild injects into its operations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Failures {
    pub reads: bool,
    pub role_creation: bool,
    pub role_grant: bool,
    pub role_deletion: bool,
    pub replies: bool,
}

#[derive(Debug, Default)]
struct GuildState {
    roles: Vec<Role>,
    member_roles: HashMap<u64, Vec<u64>>,
    calls: Vec<PlatformCall>,
    replies: Vec<String>,
    next_role_id: u64,
}

/// In-memory Discord guild standing in for the Discord API in tests.
///
/// Holds the guild roster, the role grants of every member (the bot included), and a log
/// of every mutation and reply the bot issued. All operations take `&self` so a single
/// context can be shared by the code under test and the assertions that follow.
pub struct TestContext {
    /// Discord guild ID. Also the ID of the guild's `@everyone` role.
    pub guild_id: u64,

    /// Discord user ID of the bot.
    pub bot_id: u64,

    /// Discord user ID of the guild owner.
    pub owner_id: u64,

    failures: Failures,
    state: Mutex<GuildState>,
}

impl TestContext {
    /// Creates a guild containing the given roles and member grants.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `bot_id` - Discord user ID of the bot
    /// - `owner_id` - Discord user ID of the guild owner
    /// - `roles` - Initial roster, `@everyone` included
    /// - `member_roles` - Initial role grants keyed by user ID
    /// - `failures` - Operations that should fail
    pub fn new(
        guild_id: u64,
        bot_id: u64,
        owner_id: u64,
        roles: Vec<Role>,
        member_roles: HashMap<u64, Vec<u64>>,
        failures: Failures,
    ) -> Self {
        let next_role_id = roles
            .iter()
            .map(|role| role.id.get())
            .max()
            .unwrap_or(guild_id)
            + 1;

        Self {
            guild_id,
            bot_id,
            owner_id,
            failures,
            state: Mutex::new(GuildState {
                roles,
                member_roles,
                calls: Vec::new(),
                replies: Vec::new(),
                next_role_id,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, GuildState> {
        self.state.lock().expect("test guild state poisoned")
    }

    /// Gets the guild roster in insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<Role>)` - Every role in the guild
    /// - `Err(TestError::Unavailable)` - Reads were configured to fail
    pub fn roles(&self) -> Result<Vec<Role>, TestError> {
        if self.failures.reads {
            return Err(TestError::Unavailable);
        }
        Ok(self.state().roles.clone())
    }

    /// Gets the user ID of the guild owner.
    pub fn guild_owner_id(&self) -> Result<u64, TestError> {
        if self.failures.reads {
            return Err(TestError::Unavailable);
        }
        Ok(self.owner_id)
    }

    /// Gets the role IDs granted to a member.
    ///
    /// Unknown members are treated as holding no roles.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID of the member
    pub fn member_role_ids(&self, user_id: u64) -> Result<Vec<u64>, TestError> {
        if self.failures.reads {
            return Err(TestError::Unavailable);
        }
        Ok(self
            .state()
            .member_roles
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }

    /// Gets the user IDs of every member holding a role, sorted ascending.
    ///
    /// # Arguments
    /// - `role_id` - Discord role ID
    pub fn role_member_ids(&self, role_id: u64) -> Result<Vec<u64>, TestError> {
        if self.failures.reads {
            return Err(TestError::Unavailable);
        }
        let state = self.state();
        let mut members: Vec<u64> = state
            .member_roles
            .iter()
            .filter(|(_, roles)| roles.contains(&role_id))
            .map(|(user_id, _)| *user_id)
            .collect();
        members.sort_unstable();
        Ok(members)
    }

    /// Creates a role at position 1, shifting every other non-`@everyone` role up.
    ///
    /// Mirrors where Discord places newly created roles.
    ///
    /// # Returns
    /// - `Ok(Role)` - The created role
    /// - `Err(TestError::RoleCreationRejected)` - Role creation was configured to fail
    pub fn create_role(
        &self,
        name: &str,
        mentionable: bool,
        permissions: Permissions,
    ) -> Result<Role, TestError> {
        let mut state = self.state();
        state.calls.push(PlatformCall::CreateRole {
            name: name.to_string(),
            mentionable,
            permissions,
        });

        if self.failures.role_creation {
            return Err(TestError::RoleCreationRejected);
        }

        for role in state.roles.iter_mut() {
            if role.position >= 1 {
                role.position += 1;
            }
        }

        let role_id = state.next_role_id;
        state.next_role_id += 1;

        let role = create_test_role(role_id, name, 1, mentionable, permissions);
        state.roles.push(role.clone());

        Ok(role)
    }

    /// Grants a role to a member. Granting a held role is a no-op, as on Discord.
    ///
    /// # Returns
    /// - `Ok(())` - Role granted
    /// - `Err(TestError::RoleGrantRejected)` - Role grants were configured to fail
    /// - `Err(TestError::UnknownRole)` - The role is not in the guild
    pub fn add_member_role(&self, user_id: u64, role_id: u64) -> Result<(), TestError> {
        let mut state = self.state();
        state
            .calls
            .push(PlatformCall::AddMemberRole { user_id, role_id });

        if self.failures.role_grant {
            return Err(TestError::RoleGrantRejected);
        }
        if !state.roles.iter().any(|role| role.id.get() == role_id) {
            return Err(TestError::UnknownRole(role_id));
        }

        let roles = state.member_roles.entry(user_id).or_default();
        if !roles.contains(&role_id) {
            roles.push(role_id);
        }

        Ok(())
    }

    /// Revokes a role from a member. Revoking a role that is not held is a no-op.
    pub fn remove_member_role(&self, user_id: u64, role_id: u64) -> Result<(), TestError> {
        let mut state = self.state();
        state
            .calls
            .push(PlatformCall::RemoveMemberRole { user_id, role_id });

        if let Some(roles) = state.member_roles.get_mut(&user_id) {
            roles.retain(|id| *id != role_id);
        }

        Ok(())
    }

    /// Deletes a role from the guild and from every member holding it.
    ///
    /// # Returns
    /// - `Ok(())` - Role deleted
    /// - `Err(TestError::RoleDeletionRejected)` - Role deletion was configured to fail
    /// - `Err(TestError::UnknownRole)` - The role is not in the guild
    pub fn delete_role(&self, role_id: u64) -> Result<(), TestError> {
        let mut state = self.state();
        state.calls.push(PlatformCall::DeleteRole { role_id });

        if self.failures.role_deletion {
            return Err(TestError::RoleDeletionRejected);
        }
        if !state.roles.iter().any(|role| role.id.get() == role_id) {
            return Err(TestError::UnknownRole(role_id));
        }

        state.roles.retain(|role| role.id.get() != role_id);
        for roles in state.member_roles.values_mut() {
            roles.retain(|id| *id != role_id);
        }

        Ok(())
    }

    /// Records a reply sent by the bot.
    ///
    /// # Returns
    /// - `Ok(())` - Reply recorded
    /// - `Err(TestError::ReplyRejected)` - Replies were configured to fail; nothing is recorded
    pub fn record_reply(&self, reply: String) -> Result<(), TestError> {
        if self.failures.replies {
            return Err(TestError::ReplyRejected);
        }
        self.state().replies.push(reply);
        Ok(())
    }

    /// Gets every reply sent so far, oldest first.
    pub fn replies(&self) -> Vec<String> {
        self.state().replies.clone()
    }

    /// Gets every mutation attempted so far, oldest first.
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.state().calls.clone()
    }

    /// Finds a role in the roster by name.
    pub fn role_named(&self, name: &str) -> Option<Role> {
        self.state()
            .roles
            .iter()
            .find(|role| role.name == name)
            .cloned()
    }

    /// Whether a member currently holds a role.
    pub fn member_has_role(&self, user_id: u64, role_id: u64) -> bool {
        self.state()
            .member_roles
            .get(&user_id)
            .is_some_and(|roles| roles.contains(&role_id))
    }
}
