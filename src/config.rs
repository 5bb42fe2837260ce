use crate::error::{config::ConfigError, AppError};

/// Environment variable holding the Discord bot token.
pub const BOT_TOKEN_ENV_VAR: &str = "NOTIFICATION_ROLES_BOT_TOKEN";

pub struct Config {
    pub discord_bot_token: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var(BOT_TOKEN_ENV_VAR)
                .ok()
                .filter(|token| !token.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(BOT_TOKEN_ENV_VAR.to_string()))?,
        })
    }
}
