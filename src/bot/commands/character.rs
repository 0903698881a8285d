//! Character Discord commands - live detail lookups with opportunistic
//! caching, and access to previously cached snapshots.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, commands::util, handlers::autocomplete},
        core::{accounts, characters},
        enka::{AvatarInfo, FightProp, names},
        errors::{Error, Result},
    };
    use chrono::{DateTime, Utc};
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    /// Shows live details for one character on a UID's showcase.
    ///
    /// When the UID is your own active one, the character is cached
    /// automatically for `/my_character` and `/build_cost`.
    #[poise::command(slash_command)]
    pub async fn character(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Character (avatar) ID from the showcase"] character_id: String,
        #[description = "9-digit UID (defaults to your registered one)"] uid: Option<String>,
    ) -> Result<()> {
        let data = ctx.data();
        let user_id = ctx.author().id.to_string();
        let active = accounts::active_uid(&data.store, &user_id).await?;

        let uid = match uid.or_else(|| active.clone()) {
            Some(uid) => uid,
            None => {
                ctx.send(
                    poise::CreateReply::default()
                        .content("❌ No UID given and none registered.")
                        .ephemeral(true),
                )
                .await?;
                return Ok(());
            }
        };

        ctx.defer().await?;

        let Some(player) = data.enka.fetch_player(&uid).await? else {
            ctx.say(format!("No player data found for UID `{uid}`."))
                .await?;
            return Ok(());
        };

        let Some(avatar) = player
            .avatar_info_list
            .iter()
            .find(|a| a.avatar_id.to_string() == character_id)
        else {
            ctx.say(format!(
                "Character `{character_id}` is not on UID `{uid}`'s showcase."
            ))
            .await?;
            return Ok(());
        };

        let name = names::character_name_or_id(avatar.avatar_id);
        let embed = character_embed(avatar, &name, format!("UID: {uid}"), 0x0000_FF00)?;
        ctx.send(poise::CreateReply::default().embed(embed)).await?;

        // Opportunistic cache write: only for the user's own active UID, and
        // failures must never spoil the display that already succeeded.
        if characters::should_cache(&uid, active.as_deref()) {
            let payload = serde_json::to_value(avatar)?;
            if let Err(e) =
                characters::save_character(&data.store, &user_id, &uid, &character_id, payload, &name)
                    .await
            {
                tracing::warn!("Failed to cache character {} for {}: {}", name, user_id, e);
            }
        }

        Ok(())
    }

    /// Lists the characters cached for your active UID.
    #[poise::command(slash_command)]
    pub async fn my_characters(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.defer_ephemeral().await?;

        let user_id = ctx.author().id.to_string();
        let cached = characters::characters_for_active(&ctx.data().store, &user_id).await?;

        let Some(cached) = cached.filter(|c| !c.is_empty()) else {
            let embed = serenity::CreateEmbed::default()
                .title("📋 Cached characters")
                .description(
                    "No characters cached yet.\n\n\
                     💡 **How caching works:**\n\
                     1. Register your UID with `/register_uid`\n\
                     2. Look up your own characters with `/character`\n\
                     They are saved automatically.",
                )
                .color(0x00FF_FF00);
            ctx.send(poise::CreateReply::default().embed(embed)).await?;
            return Ok(());
        };

        let mut entries: Vec<_> = cached.into_iter().collect();
        entries.sort_by(|a, b| a.1.character_name.cmp(&b.1.character_name));

        let mut description = String::new();
        for (_, snapshot) in &entries {
            let level = snapshot_level(snapshot).map_or_else(|| "?".to_string(), |l| l.to_string());
            writeln!(
                &mut description,
                "**{}** - Lv.{} (updated {})",
                snapshot.character_name,
                level,
                snapshot.last_updated.format("%Y-%m-%d")
            )?;
        }

        let embed = serenity::CreateEmbed::default()
            .title("📋 Cached characters")
            .description(description)
            .color(0x0000_99FF)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "{} character(s) | /my_character shows details",
                entries.len()
            )));
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows the cached details of one of your characters.
    #[poise::command(slash_command)]
    pub async fn my_character(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Cached character name"]
        #[autocomplete = "autocomplete::cached_character_name"]
        name: String,
    ) -> Result<()> {
        ctx.defer_ephemeral().await?;

        let user_id = ctx.author().id.to_string();
        let hit = util::find_cached_by_name(&ctx.data().store, &user_id, &name).await?;

        let Some((_, snapshot)) = hit else {
            ctx.say(format!(
                "❌ No cached character matches `{name}`. See `/my_characters` for what is saved."
            ))
            .await?;
            return Ok(());
        };

        let avatar: AvatarInfo = serde_json::from_value(snapshot.data.clone())?;
        let embed = saved_character_embed(&avatar, &snapshot.character_name, snapshot.last_updated)?;
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Removes one character from your cache.
    #[poise::command(slash_command)]
    pub async fn delete_character(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Cached character name"]
        #[autocomplete = "autocomplete::cached_character_name"]
        name: String,
    ) -> Result<()> {
        ctx.defer_ephemeral().await?;

        let store = &ctx.data().store;
        let user_id = ctx.author().id.to_string();
        let hit = util::find_cached_by_name(store, &user_id, &name).await?;

        let Some((character_id, snapshot)) = hit else {
            ctx.say(format!("❌ No cached character matches `{name}`."))
                .await?;
            return Ok(());
        };

        if characters::delete_character(store, &user_id, &character_id).await? {
            ctx.say(format!(
                "🗑️ Removed **{}** from your cache.",
                snapshot.character_name
            ))
            .await?;
        } else {
            ctx.say(format!("❌ No cached character matches `{name}`."))
                .await?;
        }
        Ok(())
    }

    fn snapshot_level(snapshot: &crate::store::CharacterSnapshot) -> Option<u8> {
        serde_json::from_value::<AvatarInfo>(snapshot.data.clone())
            .ok()
            .and_then(|a| a.level())
    }

    /// Detail embed for a cached snapshot, visually distinct from live data.
    fn saved_character_embed(
        avatar: &AvatarInfo,
        name: &str,
        last_updated: DateTime<Utc>,
    ) -> Result<serenity::CreateEmbed> {
        let embed = character_embed(
            avatar,
            &format!("💾 {name} (saved)"),
            format!("Last updated: {}", last_updated.format("%Y-%m-%d %H:%M UTC")),
            0x0099_32CC,
        )?;
        Ok(embed.field(
            "🔄 Refresh",
            "Use `/character` to fetch and re-cache the latest data.",
            false,
        ))
    }

    fn character_embed(
        avatar: &AvatarInfo,
        title: &str,
        description: String,
        color: u32,
    ) -> Result<serenity::CreateEmbed> {
        let mut embed = serenity::CreateEmbed::default()
            .title(title.to_string())
            .description(description)
            .color(color)
            .field(
                "Level",
                avatar
                    .level()
                    .map_or_else(|| "?".to_string(), |l| l.to_string()),
                true,
            )
            .field("Constellation", avatar.constellation().to_string(), true);

        for prop in [
            FightProp::MaxHp,
            FightProp::Atk,
            FightProp::Def,
            FightProp::CritRate,
            FightProp::CritDamage,
            FightProp::EnergyRecharge,
        ] {
            if let Some(value) = avatar.fight_prop(prop) {
                let rendered = if prop.is_percentage() {
                    format!("{:.1}%", value * 100.0)
                } else {
                    format!("{}", value.round())
                };
                embed = embed.field(prop.to_string(), rendered, true);
            }
        }

        let skills = avatar.skill_levels();
        if !skills.is_empty() {
            let rendered = skills
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" / ");
            embed = embed.field("Talent levels", rendered, false);
        }

        let artifacts = avatar.artifacts();
        if !artifacts.is_empty() {
            let mut rendered = String::new();
            for artifact in &artifacts {
                let Some(flat) = artifact.flat.as_ref() else {
                    continue;
                };
                let slot = flat.equip_type.as_deref().unwrap_or("Unknown slot");
                let level = artifact.reliquary.as_ref().map_or(0, |r| r.level);
                if let Some(mainstat) = flat.reliquary_mainstat.as_ref() {
                    writeln!(
                        &mut rendered,
                        "**{slot}** +{level}: {} {}",
                        mainstat.main_prop_id.as_deref().unwrap_or("?"),
                        mainstat.stat_value.unwrap_or(0.0)
                    )?;
                }
            }
            embed = embed.field("Artifacts", rendered, false);
        }

        Ok(embed)
    }
}

// Re-export all commands
pub use inner::*;
