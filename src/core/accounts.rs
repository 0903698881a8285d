//! Account registry - per-user UID bookkeeping.
//!
//! Each operation is a full load -> mutate -> save cycle over the
//! [`UserStore`] document; nothing here holds state between calls.

use crate::errors::{Error, Result};
use crate::store::{AccountRecord, UserStore};
use chrono::Utc;
use std::collections::HashMap;
use tracing::info;

/// A well-formed UID is exactly 9 ASCII digits.
#[must_use]
pub fn is_valid_uid(uid: &str) -> bool {
    uid.len() == 9 && uid.bytes().all(|b| b.is_ascii_digit())
}

fn ensure_valid_uid(uid: &str) -> Result<()> {
    if is_valid_uid(uid) {
        Ok(())
    } else {
        Err(Error::InvalidUid {
            uid: uid.to_string(),
        })
    }
}

/// The user's currently active UID, or `None` for an unknown user.
pub async fn active_uid(store: &UserStore, user_id: &str) -> Result<Option<String>> {
    let doc = store.load().await?;
    Ok(doc.get(user_id).and_then(|u| u.current_uid.clone()))
}

/// Registers (or re-registers) a UID for a user and makes it active.
///
/// Creates the user record on first registration. Re-registering an existing
/// UID refreshes its nickname and timestamp but preserves its cached
/// characters. The UID lands in `accounts` in the same mutation that sets
/// the active pointer, so the pointer never dangles.
///
/// # Errors
/// `Error::InvalidUid` for a malformed UID, rejected before any I/O.
pub async fn register_account(
    store: &UserStore,
    user_id: &str,
    uid: &str,
    nickname: Option<String>,
) -> Result<()> {
    ensure_valid_uid(uid)?;

    let mut doc = store.load().await?;
    let user = doc.entry(user_id.to_string()).or_default();
    user.current_uid = Some(uid.to_string());

    // Registration must not wipe previously cached characters
    let characters = user
        .accounts
        .remove(uid)
        .map(|a| a.characters)
        .unwrap_or_default();
    user.accounts.insert(
        uid.to_string(),
        AccountRecord {
            nickname,
            last_updated: Utc::now(),
            characters,
        },
    );

    store.save(&doc).await?;
    info!("Registered UID {} as active for user {}", uid, user_id);
    Ok(())
}

/// Switches the active UID to an already-registered one.
///
/// Returns `false` without any state change when the UID is not registered
/// for this user; a user cannot switch to an account they never registered.
///
/// # Errors
/// `Error::InvalidUid` for a malformed UID.
pub async fn switch_active_uid(store: &UserStore, user_id: &str, uid: &str) -> Result<bool> {
    ensure_valid_uid(uid)?;

    let mut doc = store.load().await?;
    let Some(user) = doc.get_mut(user_id) else {
        return Ok(false);
    };
    if !user.accounts.contains_key(uid) {
        return Ok(false);
    }

    user.current_uid = Some(uid.to_string());
    store.save(&doc).await?;
    Ok(true)
}

/// All accounts registered by a user, or `None` for an unknown user.
pub async fn list_accounts(
    store: &UserStore,
    user_id: &str,
) -> Result<Option<HashMap<String, AccountRecord>>> {
    let doc = store.load().await?;
    Ok(doc.get(user_id).map(|u| u.accounts.clone()))
}

/// Deletes the user's entire record (all accounts, all cached characters).
/// Returns whether anything was deleted.
pub async fn delete_user(store: &UserStore, user_id: &str) -> Result<bool> {
    let mut doc = store.load().await?;
    if doc.remove(user_id).is_none() {
        return Ok(false);
    }
    store.save(&doc).await?;
    info!("Deleted all data for user {}", user_id);
    Ok(true)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_store;

    const USER: &str = "discord-user-1";
    const UID_A: &str = "812345678";
    const UID_B: &str = "898765432";

    #[test]
    fn test_uid_validation() {
        assert!(is_valid_uid("812345678"));
        assert!(!is_valid_uid("81234567")); // 8 digits
        assert!(!is_valid_uid("8123456789")); // 10 digits
        assert!(!is_valid_uid("81234567a"));
        assert!(!is_valid_uid(""));
        assert!(!is_valid_uid("８１２３４５６７８")); // full-width digits
    }

    #[tokio::test]
    async fn test_register_makes_uid_active() -> crate::errors::Result<()> {
        let (_dir, store) = setup_test_store();
        register_account(&store, USER, UID_A, None).await?;
        assert_eq!(active_uid(&store, USER).await?.as_deref(), Some(UID_A));
        Ok(())
    }

    #[tokio::test]
    async fn test_register_rejects_malformed_uid() {
        let (_dir, store) = setup_test_store();
        let err = register_account(&store, USER, "12345", None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUid { .. }));
        // Rejected before any I/O: the user record was never created
        assert!(active_uid(&store, USER).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_register_second_uid_switches_active() -> crate::errors::Result<()> {
        let (_dir, store) = setup_test_store();
        register_account(&store, USER, UID_A, None).await?;
        register_account(&store, USER, UID_B, Some("alt".to_string())).await?;

        assert_eq!(active_uid(&store, USER).await?.as_deref(), Some(UID_B));
        let accounts = list_accounts(&store, USER).await?.unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[UID_B].nickname.as_deref(), Some("alt"));
        Ok(())
    }

    #[tokio::test]
    async fn test_switch_is_reversible() -> crate::errors::Result<()> {
        let (_dir, store) = setup_test_store();
        register_account(&store, USER, UID_A, None).await?;
        register_account(&store, USER, UID_B, None).await?;

        assert!(switch_active_uid(&store, USER, UID_A).await?);
        assert!(switch_active_uid(&store, USER, UID_B).await?);
        assert!(switch_active_uid(&store, USER, UID_A).await?);
        assert_eq!(active_uid(&store, USER).await?.as_deref(), Some(UID_A));
        // Repetition is idempotent
        assert!(switch_active_uid(&store, USER, UID_A).await?);
        assert_eq!(active_uid(&store, USER).await?.as_deref(), Some(UID_A));
        Ok(())
    }

    #[tokio::test]
    async fn test_switch_to_unregistered_uid_fails_cleanly() -> crate::errors::Result<()> {
        let (_dir, store) = setup_test_store();
        register_account(&store, USER, UID_A, None).await?;

        assert!(!switch_active_uid(&store, USER, UID_B).await?);
        assert_eq!(active_uid(&store, USER).await?.as_deref(), Some(UID_A));
        Ok(())
    }

    #[tokio::test]
    async fn test_switch_for_unknown_user_fails() -> crate::errors::Result<()> {
        let (_dir, store) = setup_test_store();
        assert!(!switch_active_uid(&store, USER, UID_A).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_accounts_unknown_user_is_none() -> crate::errors::Result<()> {
        let (_dir, store) = setup_test_store();
        assert!(list_accounts(&store, USER).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_user() -> crate::errors::Result<()> {
        let (_dir, store) = setup_test_store();
        register_account(&store, USER, UID_A, None).await?;

        assert!(delete_user(&store, USER).await?);
        assert!(active_uid(&store, USER).await?.is_none());
        assert!(list_accounts(&store, USER).await?.is_none());
        // Second delete finds nothing
        assert!(!delete_user(&store, USER).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_users_are_isolated() -> crate::errors::Result<()> {
        let (_dir, store) = setup_test_store();
        register_account(&store, USER, UID_A, None).await?;
        register_account(&store, "discord-user-2", UID_B, None).await?;

        assert_eq!(active_uid(&store, USER).await?.as_deref(), Some(UID_A));
        assert!(delete_user(&store, "discord-user-2").await?);
        assert_eq!(active_uid(&store, USER).await?.as_deref(), Some(UID_A));
        Ok(())
    }
}
