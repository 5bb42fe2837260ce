//! Notification Roles Bot Test Utils
//!
//! Provides shared testing utilities for the notification roles bot. This crate offers
//! Serenity object factories and an in-memory Discord guild so command handling can be
//! tested without a gateway connection.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test guilds
//! - **TestContext**: In-memory guild recording every mutation and reply
//! - **TestError**: Failures the in-memory guild can be configured to inject
//! - **serenity**: Factories for Serenity objects such as `Role`
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, serenity::create_test_notification_role};
//!
//! #[tokio::test]
//! async fn lists_roles() {
//!     let test = TestBuilder::new()
//!         .with_role(create_test_notification_role(1, "Announcements", 1))
//!         .with_bot_roles(&[1])
//!         .build();
//!
//!     // Run code under test against `test`, then inspect `test.calls()`.
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
