//! Enka Network API client and payload models.
//!
//! The API is an external collaborator: given a UID it returns a player-info
//! object plus character details, or 404 for unknown/private accounts.
//! Requests have no retry policy; a failed call surfaces once it settles.

/// Typed payload models with lossless round-tripping
pub mod models;
/// Avatar ID to name roster
pub mod names;
/// Typed stat-ID enumerations
pub mod stats;

pub use models::{AvatarInfo, PlayerData, PlayerInfo};
pub use stats::{FightProp, PropId};

use crate::errors::{Error, Result};
use reqwest::StatusCode;
use tracing::{debug, warn};

/// Default API host.
pub const DEFAULT_API_BASE: &str = "https://enka.network";

/// HTTP client for the Enka Network player API.
#[derive(Debug, Clone)]
pub struct EnkaClient {
    http: reqwest::Client,
    base_url: String,
}

impl EnkaClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Public profile URL for a UID, used in embeds.
    #[must_use]
    pub fn profile_url(&self, uid: &str) -> String {
        format!("{}/u/{uid}/", self.base_url.trim_end_matches('/'))
    }

    /// Icon URL for an avatar image hash.
    #[must_use]
    pub fn icon_url(&self, avatar_id: u64) -> String {
        format!("{}/ui/{avatar_id}.png", self.base_url.trim_end_matches('/'))
    }

    /// Fetches a player's public data.
    ///
    /// Returns `Ok(None)` when the account is unknown or has no public data
    /// (HTTP 404, or a body without `playerInfo`) - an expected condition,
    /// not a failure.
    ///
    /// # Errors
    /// `Error::UpstreamBadRequest` for HTTP 400 (malformed UID),
    /// `Error::UpstreamUnavailable` for 5xx and unexpected statuses,
    /// `Error::Http` for transport failures.
    pub async fn fetch_player(&self, uid: &str) -> Result<Option<PlayerData>> {
        let url = format!("{}/api/uid/{uid}/", self.base_url.trim_end_matches('/'));
        debug!("Fetching player data from {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return failure_for_status(status, uid);
        }
        let data: PlayerData = response.json().await?;
        Ok(public_profile(data, uid))
    }
}

/// Outcome of a non-success player fetch: 404 is the expected
/// player-not-found sentinel, 400 means the UID was malformed, anything
/// else counts as the upstream being unavailable.
fn failure_for_status(status: StatusCode, uid: &str) -> Result<Option<PlayerData>> {
    match status {
        StatusCode::NOT_FOUND => Ok(None),
        StatusCode::BAD_REQUEST => Err(Error::UpstreamBadRequest {
            uid: uid.to_string(),
        }),
        _ => {
            warn!("Enka Network returned {} for UID {}", status, uid);
            Err(Error::UpstreamUnavailable {
                status: status.as_u16(),
            })
        }
    }
}

/// A successful response without `playerInfo` carries no public data and is
/// treated the same as a 404.
fn public_profile(data: PlayerData, uid: &str) -> Option<PlayerData> {
    if data.player_info.is_none() {
        debug!("UID {} returned no playerInfo", uid);
        return None;
    }
    Some(data)
}
