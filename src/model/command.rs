//! Routed command models.

/// A fully routed `!nr` subcommand with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `!nr add <role_name>`
    Add { role_name: String },
    /// `!nr list`
    List,
    /// `!nr sub[scribe] <role_name>`
    Subscribe { role_name: String },
    /// `!nr unsub[scribe] <role_name>`
    Unsubscribe { role_name: String },
}

impl Command {
    /// Fully qualified command name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add { .. } => "nr add",
            Command::List => "nr list",
            Command::Subscribe { .. } => "nr subscribe",
            Command::Unsubscribe { .. } => "nr unsubscribe",
        }
    }
}

/// Where a command was sent from and by whom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Invocation {
    /// Discord guild ID, `None` for direct messages.
    pub guild_id: Option<u64>,
    /// Discord user ID of the message author.
    pub author_id: u64,
}

/// Prefixed message split into its subcommand word and arguments, before routing.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCommand {
    /// First word after the command group, as typed.
    pub subcommand: Option<String>,
    /// Remaining arguments in order.
    pub args: Vec<String>,
}
