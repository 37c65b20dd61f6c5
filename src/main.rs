use anyhow::{Context, Result};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info, warn};

use cashrocket_bot::bot::{schema, Command, Router};
use cashrocket_bot::config::{self, BotConfig};
use cashrocket_bot::observability::{self, LogFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    let env_file_loaded = config::load_env_file();

    observability::init_tracing(LogFormat::from_env())?;

    info!(env_file_loaded, "Starting CashRocket Telegram Bot");

    let config = BotConfig::from_env().context("Failed to load bot configuration")?;
    info!(webapp_url = %config.webapp_url, "Configuration loaded");

    let bot = Bot::new(config.bot_token.clone());

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let router = Arc::new(Router::new());
    let config = Arc::new(config);

    info!(routes = router.len(), "Bot initialized, starting dispatcher");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![router, config])
        .default_handler(|upd| async move {
            debug!(update_id = ?upd.id, "Unhandled update");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
