//! Build-cost Discord commands - estimates over the cost database and
//! cached character snapshots.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, commands::util, handlers::autocomplete},
        core::build_cost::{
            self, BuildCost, MAX_CHARACTER_LEVEL, TalentCost, TalentKind,
        },
        enka::AvatarInfo,
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    /// Estimates the mora, EXP books, and materials to level a cached character.
    #[poise::command(slash_command)]
    pub async fn build_cost(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Cached character name"]
        #[autocomplete = "autocomplete::cached_character_name"]
        character: String,
        #[description = "Target level (default 90)"]
        #[min = 1]
        #[max = 90]
        target_level: Option<u8>,
    ) -> Result<()> {
        ctx.defer().await?;

        let data = ctx.data();
        let user_id = ctx.author().id.to_string();
        let target = target_level.unwrap_or(MAX_CHARACTER_LEVEL);

        let Some((_, snapshot)) =
            util::find_cached_by_name(&data.store, &user_id, &character).await?
        else {
            ctx.say(format!(
                "❌ No cached character matches `{character}`. Look yourself up with \
                 `/character` first so the bot knows your current level."
            ))
            .await?;
            return Ok(());
        };

        let avatar: AvatarInfo = serde_json::from_value(snapshot.data.clone())?;
        let Some(current) = avatar.level() else {
            ctx.say(format!(
                "❌ The cached data for **{}** has no level. Re-fetch it with `/character`.",
                snapshot.character_name
            ))
            .await?;
            return Ok(());
        };

        if current >= target {
            ctx.say(format!(
                "✅ **{}** is already Lv.{current}, at or past the target Lv.{target}.",
                snapshot.character_name
            ))
            .await?;
            return Ok(());
        }

        let cost = build_cost::level_up_cost(data.costs.as_ref(), &snapshot.character_name, current, target)?;
        let Some(cost) = cost else {
            ctx.say(format!(
                "❌ No cost data available for **{}**.",
                snapshot.character_name
            ))
            .await?;
            return Ok(());
        };

        let mut description = format!(
            "**Lv.{current} → Lv.{target}**\n{}\n\n",
            util::progress_bar(current, target)
        );
        write!(&mut description, "{}", render_level_cost(&cost)?)?;

        let embed = serenity::CreateEmbed::default()
            .title(format!("💰 Build cost: {}", snapshot.character_name))
            .description(description)
            .color(0x00FF_A500)
            .footer(serenity::CreateEmbedFooter::new(
                "Estimates assume Hero's Wit books first; weapon costs not included.",
            ));
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Estimates the total cost of a complete build: level 1 → 90 plus all
    /// three talents 1 → 9.
    #[poise::command(slash_command)]
    pub async fn full_build(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Character name"]
        #[autocomplete = "autocomplete::cached_character_name"]
        character: String,
    ) -> Result<()> {
        ctx.defer().await?;

        let data = ctx.data();
        let user_id = ctx.author().id.to_string();

        // Prefer the cached snapshot's canonical name; fall back to the raw
        // argument so uncached characters can still be estimated.
        let name = util::find_cached_by_name(&data.store, &user_id, &character)
            .await?
            .map_or(character, |(_, snapshot)| snapshot.character_name);

        let plan = build_cost::full_build_cost(data.costs.as_ref(), &name)?;
        if plan.level_cost.is_none() && plan.normal.is_none() {
            ctx.say(format!("❌ No cost data available for **{name}**."))
                .await?;
            return Ok(());
        }

        let mut embed = serenity::CreateEmbed::default()
            .title(format!("🏗️ Full build: {name}"))
            .description(format!(
                "Level 1 → {MAX_CHARACTER_LEVEL} and all talents 1 → 9\n\n\
                 **Total mora: {}**",
                util::format_count(plan.total_mora)
            ))
            .color(0x00FF_A500);

        if let Some(cost) = &plan.level_cost {
            embed = embed.field("Leveling", render_level_cost(cost)?, false);
        }
        for (kind, cost) in [
            (TalentKind::Normal, &plan.normal),
            (TalentKind::Skill, &plan.skill),
            (TalentKind::Burst, &plan.burst),
        ] {
            if let Some(cost) = cost {
                embed = embed.field(kind.label(), render_talent_cost(cost)?, true);
            }
        }

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    fn render_level_cost(cost: &BuildCost) -> Result<String> {
        let mut out = String::new();
        writeln!(&mut out, "**Mora:** {}", util::format_count(cost.mora))?;

        let books = &cost.exp_books;
        if books.total_exp() > 0 {
            writeln!(&mut out, "**EXP books:**")?;
            if books.hero_wit > 0 {
                writeln!(&mut out, "🟣 Hero's Wit × {}", util::format_count(books.hero_wit))?;
            }
            if books.adventurer_experience > 0 {
                writeln!(
                    &mut out,
                    "🔵 Adventurer's Experience × {}",
                    util::format_count(books.adventurer_experience)
                )?;
            }
            if books.wanderer_advice > 0 {
                writeln!(
                    &mut out,
                    "🟢 Wanderer's Advice × {}",
                    util::format_count(books.wanderer_advice)
                )?;
            }
        }

        if !cost.materials.is_empty() {
            writeln!(&mut out, "**Ascension materials:**")?;
            write!(&mut out, "{}", render_materials(&cost.materials)?)?;
        }
        Ok(out)
    }

    fn render_talent_cost(cost: &TalentCost) -> Result<String> {
        let mut out = String::new();
        writeln!(&mut out, "**Mora:** {}", util::format_count(cost.mora))?;
        write!(&mut out, "{}", render_materials(&cost.materials)?)?;
        Ok(out)
    }

    fn render_materials(materials: &[crate::core::cost_db::MaterialCost]) -> Result<String> {
        let mut out = String::new();
        for material in materials {
            writeln!(
                &mut out,
                "{} {} × {}",
                util::rarity_emoji(material.rarity),
                material.name,
                util::format_count(material.count)
            )?;
        }
        Ok(out)
    }
}

// Re-export all commands
pub use inner::*;
