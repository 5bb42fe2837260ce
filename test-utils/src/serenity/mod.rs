//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! for testing purposes. These factories create valid Serenity objects by
//! deserializing JSON, simulating what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_notification_role, create_test_role};
//!
//! let announcements = create_test_notification_role(111111111, "Announcements", 1);
//! let moderator = create_test_role(222222222, "Moderator", 5, false, Permissions::KICK_MEMBERS);
//! ```
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `role::create_test_notification_role` - Create mentionable, permissionless roles

pub mod role;

// Re-export commonly used functions for convenience
pub use role::{create_test_notification_role, create_test_role};
