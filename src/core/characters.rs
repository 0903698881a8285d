//! Character cache - snapshots of fetched character data, scoped to a
//! user's registered accounts.

use crate::errors::{Error, Result};
use crate::store::{CharacterSnapshot, UserStore};
use chrono::Utc;
use std::collections::HashMap;
use tracing::info;

/// Whether a freshly fetched character should be cached: only when the UID
/// used for the fetch is the user's currently active UID. One-off lookups of
/// other accounts are displayed but never persisted, so they cannot pollute
/// the cache.
#[must_use]
pub fn should_cache(requested_uid: &str, active_uid: Option<&str>) -> bool {
    active_uid == Some(requested_uid)
}

/// Creates or overwrites a character snapshot under one of the user's
/// registered accounts, stamping `lastUpdated` to now.
///
/// # Errors
/// `Error::UserNotRegistered` when the user has no record at all;
/// `Error::AccountNotRegistered` when `uid` is not one of their accounts.
/// A snapshot cannot be attached to an unknown account.
pub async fn save_character(
    store: &UserStore,
    user_id: &str,
    uid: &str,
    character_id: &str,
    payload: serde_json::Value,
    character_name: &str,
) -> Result<()> {
    let mut doc = store.load().await?;

    let user = doc.get_mut(user_id).ok_or_else(|| Error::UserNotRegistered {
        user_id: user_id.to_string(),
    })?;
    let account = user
        .accounts
        .get_mut(uid)
        .ok_or_else(|| Error::AccountNotRegistered {
            uid: uid.to_string(),
        })?;

    account.characters.insert(
        character_id.to_string(),
        CharacterSnapshot {
            data: payload,
            character_name: character_name.to_string(),
            last_updated: Utc::now(),
        },
    );

    store.save(&doc).await?;
    info!(
        "Cached character {} ({}) for user {} on UID {}",
        character_name, character_id, user_id, uid
    );
    Ok(())
}

/// All snapshots cached under the user's active account, or `None` when the
/// user has no active account. A registered account with nothing cached yet
/// yields an empty map, not `None`.
pub async fn characters_for_active(
    store: &UserStore,
    user_id: &str,
) -> Result<Option<HashMap<String, CharacterSnapshot>>> {
    let doc = store.load().await?;
    Ok(doc
        .get(user_id)
        .and_then(|u| u.active_account())
        .map(|a| a.characters.clone()))
}

/// All snapshots cached under an explicitly named account, independent of
/// which account is active.
pub async fn characters_for_uid(
    store: &UserStore,
    user_id: &str,
    uid: &str,
) -> Result<Option<HashMap<String, CharacterSnapshot>>> {
    let doc = store.load().await?;
    Ok(doc
        .get(user_id)
        .and_then(|u| u.accounts.get(uid))
        .map(|a| a.characters.clone()))
}

/// One snapshot from the active account's cache, or `None` if absent.
pub async fn character(
    store: &UserStore,
    user_id: &str,
    character_id: &str,
) -> Result<Option<CharacterSnapshot>> {
    let doc = store.load().await?;
    Ok(doc
        .get(user_id)
        .and_then(|u| u.active_account())
        .and_then(|a| a.characters.get(character_id))
        .cloned())
}

/// Removes one snapshot from the active account's cache. Returns whether it
/// existed; a miss leaves the document untouched.
pub async fn delete_character(
    store: &UserStore,
    user_id: &str,
    character_id: &str,
) -> Result<bool> {
    let mut doc = store.load().await?;
    let removed = doc
        .get_mut(user_id)
        .and_then(|u| u.active_account_mut())
        .and_then(|a| a.characters.remove(character_id));
    if removed.is_none() {
        return Ok(false);
    }

    store.save(&doc).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::accounts::{register_account, switch_active_uid};
    use crate::test_utils::{sample_payload, setup_test_store};

    const USER: &str = "discord-user-1";
    const UID_A: &str = "812345678";
    const UID_B: &str = "898765432";
    const HU_TAO: &str = "10000046";

    #[test]
    fn test_should_cache_truth_table() {
        assert!(should_cache(UID_A, Some(UID_A)));
        assert!(!should_cache(UID_A, Some(UID_B)));
        assert!(!should_cache(UID_A, None));
    }

    #[tokio::test]
    async fn test_save_then_get_round_trips() -> crate::errors::Result<()> {
        let (_dir, store) = setup_test_store();
        register_account(&store, USER, UID_A, None).await?;

        let payload = sample_payload(80);
        save_character(&store, USER, UID_A, HU_TAO, payload.clone(), "Hu Tao").await?;

        let snapshot = character(&store, USER, HU_TAO).await?.unwrap();
        assert_eq!(snapshot.data, payload);
        assert_eq!(snapshot.character_name, "Hu Tao");
        Ok(())
    }

    #[tokio::test]
    async fn test_save_requires_registered_user() {
        let (_dir, store) = setup_test_store();
        let err = save_character(&store, USER, UID_A, HU_TAO, sample_payload(1), "Hu Tao")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UserNotRegistered { .. }));
    }

    #[tokio::test]
    async fn test_save_requires_registered_account() -> crate::errors::Result<()> {
        let (_dir, store) = setup_test_store();
        register_account(&store, USER, UID_A, None).await?;

        let err = save_character(&store, USER, UID_B, HU_TAO, sample_payload(1), "Hu Tao")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AccountNotRegistered { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_snapshot() -> crate::errors::Result<()> {
        let (_dir, store) = setup_test_store();
        register_account(&store, USER, UID_A, None).await?;

        save_character(&store, USER, UID_A, HU_TAO, sample_payload(70), "Hu Tao").await?;
        save_character(&store, USER, UID_A, HU_TAO, sample_payload(80), "Hu Tao").await?;

        let all = characters_for_active(&store, USER).await?.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[HU_TAO].data, sample_payload(80));
        Ok(())
    }

    #[tokio::test]
    async fn test_reregistration_preserves_cached_characters() -> crate::errors::Result<()> {
        let (_dir, store) = setup_test_store();
        register_account(&store, USER, UID_A, None).await?;
        save_character(&store, USER, UID_A, HU_TAO, sample_payload(80), "Hu Tao").await?;

        register_account(&store, USER, UID_A, Some("renamed".to_string())).await?;

        let snapshot = character(&store, USER, HU_TAO).await?;
        assert!(snapshot.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_cache_is_scoped_to_account() -> crate::errors::Result<()> {
        let (_dir, store) = setup_test_store();
        register_account(&store, USER, UID_A, None).await?;
        register_account(&store, USER, UID_B, None).await?;
        // UID_B is now active; cache one character under each account
        save_character(&store, USER, UID_B, HU_TAO, sample_payload(80), "Hu Tao").await?;
        save_character(&store, USER, UID_A, "10000002", sample_payload(90), "Ayaka").await?;

        let active = characters_for_active(&store, USER).await?.unwrap();
        assert!(active.contains_key(HU_TAO));
        assert!(!active.contains_key("10000002"));

        // Explicit-account reads are independent of the active pointer
        let other = characters_for_uid(&store, USER, UID_A).await?.unwrap();
        assert!(other.contains_key("10000002"));

        switch_active_uid(&store, USER, UID_A).await?;
        assert!(character(&store, USER, HU_TAO).await?.is_none());
        assert!(character(&store, USER, "10000002").await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_registered_account_with_empty_cache_is_empty_map() -> crate::errors::Result<()> {
        let (_dir, store) = setup_test_store();
        register_account(&store, USER, UID_A, None).await?;

        let all = characters_for_active(&store, USER).await?;
        assert_eq!(all.map(|m| m.len()), Some(0));
        Ok(())
    }

    #[tokio::test]
    async fn test_no_active_account_is_none() -> crate::errors::Result<()> {
        let (_dir, store) = setup_test_store();
        assert!(characters_for_active(&store, USER).await?.is_none());
        assert!(character(&store, USER, HU_TAO).await?.is_none());
        assert!(characters_for_uid(&store, USER, UID_A).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_character() -> crate::errors::Result<()> {
        let (_dir, store) = setup_test_store();
        register_account(&store, USER, UID_A, None).await?;
        save_character(&store, USER, UID_A, HU_TAO, sample_payload(80), "Hu Tao").await?;

        // Deleting a character that was never cached changes nothing
        assert!(!delete_character(&store, USER, "10000002").await?);
        assert!(character(&store, USER, HU_TAO).await?.is_some());

        assert!(delete_character(&store, USER, HU_TAO).await?);
        assert!(character(&store, USER, HU_TAO).await?.is_none());
        Ok(())
    }
}
