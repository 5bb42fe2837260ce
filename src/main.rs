mod bot;
mod command;
mod config;
mod data;
mod error;
mod model;
mod service;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().inspect_err(|e| tracing::error!("{}", e))?;

    bot::start::start_bot(&config).await
}
