//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the `GenshinBuddy`
//! application: all slash commands, autocomplete handlers, and the shared
//! bot context.

/// Discord command implementations (account, player, character, build, general)
pub mod commands;
/// Discord interaction handlers (autocomplete)
pub mod handlers;

use crate::core::cost_db::CostDatabase;
use crate::enka::EnkaClient;
use crate::errors::Error;
use crate::store::UserStore;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands: the user-data store, the Enka
/// Network client, and the build-cost database.
pub struct BotData {
    /// Handle to the on-disk user-data document
    pub store: UserStore,
    /// Enka Network API client
    pub enka: EnkaClient,
    /// Read-only build-cost tables
    pub costs: Arc<dyn CostDatabase>,
}

impl BotData {
    #[must_use]
    pub fn new(store: UserStore, enka: EnkaClient, costs: Arc<dyn CostDatabase>) -> Self {
        Self { store, enka, costs }
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(error.user_message()).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Builds the poise framework, registers all commands globally, and runs the
/// client until it exits.
#[instrument(skip_all)]
pub async fn run_bot(token: String, data: BotData) -> Result<(), serenity::Error> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::ping(),
                commands::help(),
                commands::register_uid(),
                commands::switch_uid(),
                commands::my_accounts(),
                commands::delete_data(),
                commands::genshin(),
                commands::my_genshin(),
                commands::character(),
                commands::my_characters(),
                commands::my_character(),
                commands::delete_character(),
                commands::build_cost(),
                commands::full_build(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await?;

    info!("Starting bot client...");
    client.start().await.inspect_err(|why| {
        error!("Client error: {:?}", why);
    })
}
