//! Player profile Discord commands - live Enka Network lookups.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::accounts,
        enka::names,
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    /// Shows a player's public Genshin profile. With no UID given, uses your
    /// registered active UID.
    #[poise::command(slash_command)]
    pub async fn genshin(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "9-digit UID (defaults to your registered one)"] uid: Option<String>,
    ) -> Result<()> {
        let uid = match uid {
            Some(uid) => uid,
            None => {
                let saved =
                    accounts::active_uid(&ctx.data().store, &ctx.author().id.to_string()).await?;
                let Some(saved) = saved else {
                    ctx.send(
                        poise::CreateReply::default()
                            .content(
                                "❌ No UID given and none registered.\n\
                                 - Pass a UID, or\n\
                                 - register one with `/register_uid`.",
                            )
                            .ephemeral(true),
                    )
                    .await?;
                    return Ok(());
                };
                saved
            }
        };

        show_player(ctx, &uid).await
    }

    /// Shows the profile for your registered active UID.
    #[poise::command(slash_command)]
    pub async fn my_genshin(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let saved = accounts::active_uid(&ctx.data().store, &ctx.author().id.to_string()).await?;
        let Some(uid) = saved else {
            ctx.send(
                poise::CreateReply::default()
                    .content("❌ No UID registered. Register one with `/register_uid` first.")
                    .ephemeral(true),
            )
            .await?;
            return Ok(());
        };

        show_player(ctx, &uid).await
    }

    /// Shared fetch-and-render path for both profile commands.
    async fn show_player(ctx: poise::Context<'_, BotData, Error>, uid: &str) -> Result<()> {
        ctx.defer().await?;

        let data = ctx.data();
        let Some(player) = data.enka.fetch_player(uid).await? else {
            ctx.say(format!(
                "No player data found for UID `{uid}`. Make sure character details \
                 are public in the in-game profile settings."
            ))
            .await?;
            return Ok(());
        };

        // fetch_player returns None when playerInfo is absent
        #[allow(clippy::expect_used)]
        let info = player
            .player_info
            .as_ref()
            .expect("fetch_player yields Some only with playerInfo");

        let mut embed = serenity::CreateEmbed::default()
            .title(format!("{}'s Genshin profile", info.nickname))
            .url(data.enka.profile_url(uid))
            .description(format!("UID: {uid}"))
            .color(0x0000_99FF)
            .field("Adventure Rank", info.level.to_string(), true)
            .field("World Level", info.world_level.to_string(), true)
            .field(
                "Spiral Abyss",
                format!(
                    "Floor {} Chamber {}",
                    info.tower_floor_index, info.tower_level_index
                ),
                true,
            );

        if let Some(signature) = info.signature.as_deref().filter(|s| !s.is_empty()) {
            embed = embed.field("Signature", signature, false);
        }
        if let Some(avatar_id) = info.profile_picture.as_ref().and_then(|p| p.avatar_id) {
            embed = embed.thumbnail(data.enka.icon_url(avatar_id));
        }

        if !player.avatar_info_list.is_empty() {
            let mut showcase = String::new();
            for avatar in &player.avatar_info_list {
                let name = names::character_name_or_id(avatar.avatar_id);
                let level = avatar
                    .level()
                    .map_or_else(|| "?".to_string(), |l| l.to_string());
                writeln!(
                    &mut showcase,
                    "{name} (Lv.{level}) - `/character character_id:{}`",
                    avatar.avatar_id
                )?;
            }
            embed = embed.field("Character showcase", showcase, false);
        }

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
