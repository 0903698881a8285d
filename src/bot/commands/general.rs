//! General Discord commands - ping and help.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**GenshinBuddy Help**\n\
        Here is a summary of all available commands.\n\n\
        **Profile Commands**\n\
        • `/genshin [uid]` - Shows a player's public profile (your registered UID by default).\n\
        • `/my_genshin` - Shows the profile for your active UID.\n\
        • `/character <character_id> [uid]` - Shows live character details; your own characters are cached automatically.\n\n\
        **Account Commands**\n\
        • `/register_uid <uid> [nickname]` - Registers a UID and makes it active.\n\
        • `/switch_uid <uid>` - Switches your active UID to another registered one.\n\
        • `/my_accounts` - Lists your registered UIDs.\n\
        • `/delete_data` - Deletes everything stored about you.\n\n\
        **Saved Character Commands**\n\
        • `/my_characters` - Lists your cached characters.\n\
        • `/my_character <name>` - Shows a cached character's details.\n\
        • `/delete_character <name>` - Removes one cached character.\n\n\
        **Build Planning**\n\
        • `/build_cost <character> [target_level]` - Materials and mora to reach a level.\n\
        • `/full_build <character>` - Cost of a complete 90/9/9/9 build.\n\n\
        **Utility**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
