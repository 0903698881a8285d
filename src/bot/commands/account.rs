//! Account Discord commands - UID registration, switching, listing, and
//! data deletion. Replies are ephemeral; account bookkeeping is between the
//! user and the bot.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::accounts,
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    /// Registers a Genshin UID for your Discord account and makes it active.
    ///
    /// Re-registering an existing UID updates its nickname without touching
    /// previously cached characters.
    #[poise::command(slash_command)]
    pub async fn register_uid(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Your 9-digit UID, e.g. 812345678"] uid: String,
        #[description = "Optional nickname for this account"] nickname: Option<String>,
    ) -> Result<()> {
        ctx.defer_ephemeral().await?;

        if !accounts::is_valid_uid(&uid) {
            ctx.say("❌ A UID is exactly 9 digits, e.g. `812345678`.")
                .await?;
            return Ok(());
        }

        let store = &ctx.data().store;
        accounts::register_account(store, &ctx.author().id.to_string(), &uid, nickname.clone())
            .await?;

        let nickname_text = nickname.map_or_else(String::new, |n| format!(" (nickname: {n})"));
        let embed = serenity::CreateEmbed::default()
            .title("✅ UID registered")
            .description(format!("Registered UID `{uid}` as active.{nickname_text}"))
            .color(0x0000_FF00)
            .field(
                "📌 Usage",
                "`/my_genshin` now works without typing a UID.",
                false,
            )
            .field(
                "📊 Multiple accounts",
                "Register more UIDs and switch between them with `/switch_uid`.",
                false,
            );
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Switches your active UID to another registered account.
    #[poise::command(slash_command)]
    pub async fn switch_uid(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "The registered 9-digit UID to switch to"] uid: String,
    ) -> Result<()> {
        ctx.defer_ephemeral().await?;

        if !accounts::is_valid_uid(&uid) {
            ctx.say("❌ A UID is exactly 9 digits, e.g. `812345678`.")
                .await?;
            return Ok(());
        }

        let store = &ctx.data().store;
        if accounts::switch_active_uid(store, &ctx.author().id.to_string(), &uid).await? {
            ctx.say(format!("✅ Switched your active UID to `{uid}`."))
                .await?;
        } else {
            ctx.say(format!(
                "❌ UID `{uid}` is not registered. Register it first with `/register_uid`."
            ))
            .await?;
        }
        Ok(())
    }

    /// Lists all UIDs you have registered, with the active one marked.
    #[poise::command(slash_command)]
    pub async fn my_accounts(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.defer_ephemeral().await?;

        let store = &ctx.data().store;
        let user_id = ctx.author().id.to_string();
        let accounts_map = accounts::list_accounts(store, &user_id).await?;
        let active = accounts::active_uid(store, &user_id).await?;

        let Some(accounts_map) = accounts_map.filter(|m| !m.is_empty()) else {
            ctx.say("❌ No registered accounts. Register a UID with `/register_uid` first.")
                .await?;
            return Ok(());
        };

        let mut entries: Vec<_> = accounts_map.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut description = String::new();
        for (uid, account) in entries {
            let marker = if active.as_deref() == Some(uid.as_str()) {
                " (active)"
            } else {
                ""
            };
            writeln!(&mut description, "**UID:** {uid}{marker}")?;
            writeln!(
                &mut description,
                "**Nickname:** {}",
                account.nickname.as_deref().unwrap_or("none")
            )?;
            writeln!(
                &mut description,
                "**Cached characters:** {}",
                account.characters.len()
            )?;
            writeln!(
                &mut description,
                "**Last updated:** {}\n",
                account.last_updated.format("%Y-%m-%d")
            )?;
        }

        let embed = serenity::CreateEmbed::default()
            .title("📋 Registered accounts")
            .description(description)
            .color(0x0000_99FF)
            .footer(serenity::CreateEmbedFooter::new(
                "Use /switch_uid to change which account is active",
            ));
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Deletes everything stored about you: all UIDs and cached characters.
    #[poise::command(slash_command)]
    pub async fn delete_data(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.defer_ephemeral().await?;

        let store = &ctx.data().store;
        if accounts::delete_user(store, &ctx.author().id.to_string()).await? {
            let embed = serenity::CreateEmbed::default()
                .title("🗑️ Data deleted")
                .description("All of your registered UIDs and cached characters were removed.")
                .color(0x00FF_0000);
            ctx.send(poise::CreateReply::default().embed(embed)).await?;
        } else {
            ctx.say("ℹ️ Nothing was stored for your account.").await?;
        }
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
