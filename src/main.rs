//! Binary entry point: configuration, store and client setup, then the bot.

use dotenvy::dotenv;
use genshin_buddy::bot::{self, BotData};
use genshin_buddy::config;
use genshin_buddy::core::cost_db::JsonCostDatabase;
use genshin_buddy::enka::EnkaClient;
use genshin_buddy::errors::{Error, Result};
use genshin_buddy::store::UserStore;
use std::{env, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Open the user-data store
    let store = UserStore::open(&app_config.user_data_file)
        .await
        .inspect(|_| info!("User data store opened successfully."))
        .inspect_err(|e| error!("Failed to open user data store: {}", e))?;

    // 5. Load the build-cost database
    let costs = JsonCostDatabase::from_path(&app_config.cost_data_file)
        .inspect(|_| info!("Build-cost database loaded successfully."))
        .inspect_err(|e| error!("Failed to load build-cost database: {}", e))?;

    // 6. Run the bot
    // DISCORD_BOT_TOKEN is loaded here, directly before use, not stored in AppConfig
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    let enka = EnkaClient::new(app_config.enka_api_base.clone());
    let data = BotData::new(store, enka, Arc::new(costs));
    bot::run_bot(token, data).await.map_err(Error::from)?;

    Ok(())
}
