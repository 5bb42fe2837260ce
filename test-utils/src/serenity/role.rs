//! Test factory for creating Serenity Role objects.
//!
//! This module provides factory functions for creating mock Serenity `Role` structs
//! for testing purposes. These factories create valid Role objects by deserializing
//! JSON, simulating what Discord's API would return.

use serenity::all::{Permissions, Role};

/// Creates a test Serenity Role with customizable fields.
///
/// Creates a Role object by deserializing JSON with the provided values.
/// All other fields are set to reasonable defaults (no color, not hoisted,
/// not managed).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `position` - Role position in the hierarchy (higher = more important)
/// - `mentionable` - Whether the role can be mentioned by members
/// - `permissions` - Permissions granted by the role
///
/// # Returns
/// - `Role` - A valid Serenity Role struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use serenity::all::Permissions;
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(123456789, "Moderator", 10, false, Permissions::KICK_MEMBERS);
/// assert_eq!(role.name, "Moderator");
/// assert!(!role.mentionable);
/// ```
pub fn create_test_role(
    role_id: u64,
    name: &str,
    position: u16,
    mentionable: bool,
    permissions: Permissions,
) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": permissions.bits().to_string(),
        "managed": false,
        "mentionable": mentionable,
        "flags": 0,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}

/// Creates a test role shaped like a notification role.
///
/// The role is mentionable and grants no permissions. Whether it counts as a
/// notification role still depends on the bot holding it.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `position` - Role position in the hierarchy
///
/// # Returns
/// - `Role` - A mentionable, permissionless Serenity Role
pub fn create_test_notification_role(role_id: u64, name: &str, position: u16) -> Role {
    create_test_role(role_id, name, position, true, Permissions::empty())
}
