use std::fmt;

/// A single reply to the message that invoked a command.
///
/// Rendered as a Discord embed by the platform implementation.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Embed with only a description.
    Description(String),
    /// Embed with a single titled field.
    Field { name: String, value: String },
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Description(text) => write!(f, "{}", text),
            Reply::Field { name, value } => write!(f, "{}: {}", name, value),
        }
    }
}
