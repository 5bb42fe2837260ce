//! Business logic of the notification role commands.
//!
//! - `predicate` - Pure notification role classification
//! - `notification_role` - Guard pipeline behind `add`, `list`, `subscribe` and `unsubscribe`

pub mod notification_role;
pub mod predicate;
