use thiserror::Error;

/// Failures produced by the in-memory guild.
///
/// Injected through `TestBuilder` to exercise the bot's handling of Discord API errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TestError {
    /// Reads of the guild roster or member state were configured to fail.
    #[error("Discord is unavailable")]
    Unavailable,

    /// Role creation was configured to fail.
    #[error("Role creation rejected")]
    RoleCreationRejected,

    /// Granting roles was configured to fail.
    #[error("Role grant rejected")]
    RoleGrantRejected,

    /// Role deletion was configured to fail.
    #[error("Role deletion rejected")]
    RoleDeletionRejected,

    /// Sending replies was configured to fail.
    #[error("Reply rejected")]
    ReplyRejected,

    /// The referenced role does not exist in the guild.
    #[error("Unknown role {0}")]
    UnknownRole(u64),
}
