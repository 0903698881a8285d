//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggests cached character names as the user types, so commands that take
//! a character name never require exact spelling up front.

use crate::{bot::BotData, core::characters, errors::Error};

/// Provides autocomplete suggestions for cached character names.
///
/// Looks at the snapshots cached under the user's active account and returns
/// up to 25 names matching the partial input, case-insensitively. A storage
/// failure yields no suggestions rather than an error; the command itself
/// will surface the problem if it persists.
///
/// # Arguments
/// * `ctx` - The poise context containing the user-data store
/// * `partial` - The partial string the user has typed so far
///
/// # Returns
/// A vector of character names that match the partial input
pub async fn cached_character_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let store = &ctx.data().store;
    let user_id = ctx.author().id.to_string();

    let Ok(Some(cached)) = characters::characters_for_active(store, &user_id).await else {
        return Vec::new();
    };

    let partial_lower = partial.to_lowercase();

    let mut matching: Vec<String> = cached
        .into_values()
        .map(|snapshot| snapshot.character_name)
        .filter(|name| name.to_lowercase().contains(&partial_lower))
        .take(25) // Discord autocomplete limit
        .collect();

    // Sort alphabetically for consistent UX
    matching.sort();
    matching
}
