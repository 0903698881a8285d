//! Serde model of the persisted user-data document.
//!
//! The on-disk representation is a single JSON object keyed by Discord user
//! ID. Field names (`currentUID`, `characterName`, `lastUpdated`) are part of
//! the external file format and must not change; the Rust names follow crate
//! convention and map through `serde(rename)`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The entire persisted document: one entry per known Discord user.
pub type Document = HashMap<String, UserRecord>;

/// Per-user state: which UID is active and every account ever registered.
///
/// Invariant: `current_uid`, when set, is always a key of `accounts`.
/// Registration inserts into `accounts` in the same mutation that sets
/// `current_uid`, so the pointer can never dangle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// The currently selected UID for this user.
    #[serde(rename = "currentUID")]
    pub current_uid: Option<String>,
    /// All accounts registered by this user, keyed by UID.
    #[serde(default)]
    pub accounts: HashMap<String, AccountRecord>,
}

/// One registered game account (UID) and its cached characters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Optional user-supplied nickname for this account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Stamped on every registration/update of this account's metadata.
    #[serde(rename = "lastUpdated")]
    pub last_updated: DateTime<Utc>,
    /// Cached character snapshots, keyed by character (avatar) ID.
    #[serde(default)]
    pub characters: HashMap<String, CharacterSnapshot>,
}

/// A cached copy of a character's data as of a specific fetch time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    /// Opaque character payload exactly as returned by Enka Network.
    pub data: serde_json::Value,
    /// Display name resolved at snapshot time; never re-resolved later.
    #[serde(rename = "characterName")]
    pub character_name: String,
    #[serde(rename = "lastUpdated")]
    pub last_updated: DateTime<Utc>,
}

impl UserRecord {
    /// The account record the active UID points at, if any.
    #[must_use]
    pub fn active_account(&self) -> Option<&AccountRecord> {
        self.current_uid
            .as_deref()
            .and_then(|uid| self.accounts.get(uid))
    }

    /// Mutable access to the active account record.
    pub fn active_account_mut(&mut self) -> Option<&mut AccountRecord> {
        let uid = self.current_uid.clone()?;
        self.accounts.get_mut(&uid)
    }
}
