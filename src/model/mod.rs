//! Domain models and parameter types.
//!
//! Domain models are converted from Serenity objects at the platform boundary so the
//! command pipeline works with plain data and stays testable without a Discord
//! connection.

pub mod command;
pub mod reply;
pub mod role;
