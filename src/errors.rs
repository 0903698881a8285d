//! Unified error types for `GenshinBuddy`.
//!
//! Not-found conditions (unknown player, uncached character, character absent
//! from the cost database) are `Option`/`bool` results on the relevant
//! functions, never variants here. This enum covers validation failures,
//! upstream (Enka Network) failures, and persistence failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid UID `{uid}`: a UID is exactly 9 digits")]
    InvalidUid { uid: String },

    #[error("Invalid level range {current} -> {target} (max {max})")]
    InvalidLevelRange { current: u8, target: u8, max: u8 },

    #[error("User {user_id} has no registered UID")]
    UserNotRegistered { user_id: String },

    #[error("UID {uid} is not registered for this user")]
    AccountNotRegistered { uid: String },

    #[error("Enka Network rejected UID {uid} as malformed")]
    UpstreamBadRequest { uid: String },

    #[error("Enka Network returned status {status}")]
    UpstreamUnavailable { status: u16 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Error::Framework(Box::new(value))
    }
}

impl Error {
    /// Message shown to the Discord user when a command fails.
    ///
    /// Validation errors surface as-is so the user can correct their input;
    /// upstream and internal failures collapse to generic messages so that
    /// no internal detail leaks into chat.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Error::InvalidUid { .. }
            | Error::InvalidLevelRange { .. }
            | Error::UserNotRegistered { .. }
            | Error::AccountNotRegistered { .. } => format!("❌ {self}"),
            Error::UpstreamBadRequest { uid } => {
                format!("❌ Enka Network rejected UID `{uid}`. Double-check the UID.")
            }
            Error::UpstreamUnavailable { .. } | Error::Http(_) => {
                "⚠️ Enka Network appears to be unavailable. Please try again later.".to_string()
            }
            _ => "❌ Something went wrong while processing your command.".to_string(),
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
