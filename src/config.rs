//! Application configuration from environment variables.
//!
//! Everything has a sensible default so a bare `DISCORD_BOT_TOKEN` is enough
//! to run the bot; the `.env` file is loaded by `main` before this module is
//! consulted.

use crate::errors::Result;
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Default path of the user-data document, matching the file name the bot
/// has always used so existing data keeps working.
pub const DEFAULT_USER_DATA_FILE: &str = "userData.json";
/// Default path of the build-cost database.
pub const DEFAULT_COST_DATA_FILE: &str = "data/build_costs.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the single JSON document holding all user state.
    pub user_data_file: PathBuf,
    /// Path of the JSON build-cost database.
    pub cost_data_file: PathBuf,
    /// Base URL of the Enka Network API.
    pub enka_api_base: String,
}

/// Reads configuration from `USER_DATA_FILE`, `COST_DATA_FILE`, and
/// `ENKA_API_BASE`, falling back to defaults for anything unset.
pub fn load_app_configuration() -> Result<AppConfig> {
    let user_data_file =
        env::var("USER_DATA_FILE").unwrap_or_else(|_| DEFAULT_USER_DATA_FILE.to_string());
    let cost_data_file =
        env::var("COST_DATA_FILE").unwrap_or_else(|_| DEFAULT_COST_DATA_FILE.to_string());
    let enka_api_base =
        env::var("ENKA_API_BASE").unwrap_or_else(|_| crate::enka::DEFAULT_API_BASE.to_string());

    let config = AppConfig {
        user_data_file: PathBuf::from(user_data_file),
        cost_data_file: PathBuf::from(cost_data_file),
        enka_api_base,
    };
    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_defaults_apply_when_env_unset() {
        // Env vars may or may not be set in the test environment; the loader
        // must succeed either way and always produce non-empty values.
        let config = load_app_configuration().unwrap();
        assert!(!config.enka_api_base.is_empty());
        assert!(!config.user_data_file.as_os_str().is_empty());
        assert!(!config.cost_data_file.as_os_str().is_empty());
    }
}
