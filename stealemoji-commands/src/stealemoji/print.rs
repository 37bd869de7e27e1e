use std::collections::HashMap;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use stealemoji_core::{Context, Error};
use stealemoji_database::impls::stolen_emojis::list_stolen_emojis;
use stealemoji_database::model::stolen_emoji::StolenEmojiRecord;
use stealemoji_utils::embed::say_embed;
use stealemoji_utils::formatting::{PAGE_LENGTH, pagify};

pub const META: CommandMeta = CommandMeta {
    name: "print",
    desc: "Prints all the emojis that have been stolen so far.",
    category: "emoji",
    usage: "!stealemoji print",
};

#[poise::command(prefix_command, slash_command, owners_only, category = "Emoji")]
pub async fn print(ctx: Context<'_>) -> Result<(), Error> {
    let records = list_stolen_emojis(&ctx.data().db).await?;
    let visible = visible_emojis(ctx.cache());
    let rendered = render_stolen(&records, &visible);

    if rendered.is_empty() {
        say_embed(ctx, "No stolen emojis yet").await?;
        return Ok(());
    }

    for page in pagify(&rendered, ' ', PAGE_LENGTH) {
        say_embed(ctx, page).await?;
    }

    Ok(())
}

/// Every emoji the bot can currently render, keyed by id.
fn visible_emojis(cache: &serenity::Cache) -> HashMap<u64, String> {
    let mut visible = HashMap::new();
    for guild_id in cache.guilds() {
        let Some(guild) = cache.guild(guild_id) else {
            continue;
        };
        visible.extend(
            guild
                .emojis
                .values()
                .map(|emoji| (emoji.id.get(), emoji.to_string())),
        );
    }
    visible
}

/// Space-separated list of the stolen emojis that can be rendered, preferring
/// the bank copy over the original.
fn render_stolen(records: &[StolenEmojiRecord], visible: &HashMap<u64, String>) -> String {
    records
        .iter()
        .filter_map(|record| {
            record
                .saved_emoji_id
                .and_then(|id| visible.get(&id))
                .or_else(|| visible.get(&record.emoji_id))
                .map(String::as_str)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
