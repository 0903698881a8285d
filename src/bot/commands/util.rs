//! Shared formatting helpers for the command layer.

use crate::core::characters;
use crate::errors::Result;
use crate::store::{CharacterSnapshot, UserStore};

/// Formats an integer with thousands separators, e.g. `1234567` ->
/// `"1,234,567"`.
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Colored square for a material rarity (1-5 stars).
#[must_use]
pub fn rarity_emoji(rarity: u8) -> &'static str {
    match rarity {
        2 => "🟢",
        3 => "🔵",
        4 => "🟣",
        5 => "🟡",
        _ => "⚪",
    }
}

/// Text progress bar for leveling progress, like `██████░░░░`.
#[must_use]
pub fn progress_bar(current: u8, target: u8) -> String {
    let percent = if target == 0 {
        0
    } else {
        usize::from(current) * 100 / usize::from(target)
    };
    let filled = (percent / 10).min(10);
    format!("{}{} {percent}%", "█".repeat(filled), "░".repeat(10 - filled))
}

/// Finds a cached snapshot on the user's active account whose display name
/// contains `query` (or vice versa, to tolerate partial input either way).
/// Returns the character ID alongside the snapshot.
pub async fn find_cached_by_name(
    store: &UserStore,
    user_id: &str,
    query: &str,
) -> Result<Option<(String, CharacterSnapshot)>> {
    let Some(cached) = characters::characters_for_active(store, user_id).await? else {
        return Ok(None);
    };
    Ok(cached.into_iter().find(|(_, snapshot)| {
        snapshot.character_name.contains(query) || query.contains(&snapshot.character_name)
    }))
}
