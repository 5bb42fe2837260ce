//! Platform access layer.
//!
//! Defines the interfaces the command pipeline uses to read and mutate guild role state
//! (`platform`) and their Discord implementation (`discord`). Serenity objects are
//! converted to domain models here, at the platform boundary, so nothing above this
//! layer depends on Discord's wire types.

pub mod discord;
pub mod platform;
