//! Discord implementations of the platform interfaces.

pub mod context;

pub use context::DiscordCommandContext;
