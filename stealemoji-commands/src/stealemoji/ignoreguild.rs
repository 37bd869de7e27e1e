use crate::CommandMeta;
use stealemoji_core::{Context, Error};
use stealemoji_database::impls::disabled_guilds::toggle_guild_disabled;
use stealemoji_utils::embed::say_embed;

use super::embeds::guild_only_message;

pub const META: CommandMeta = CommandMeta {
    name: "ignoreguild",
    desc: "Toggles whether reactions in this server are ignored by the collector.",
    category: "emoji",
    usage: "!stealemoji ignoreguild",
};

#[poise::command(prefix_command, slash_command, owners_only, category = "Emoji")]
pub async fn ignoreguild(ctx: Context<'_>) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let ignored = toggle_guild_disabled(&ctx.data().db, guild_id.get()).await?;
    let message = if ignored {
        "Emoji reactions in this server are now ignored."
    } else {
        "Emoji reactions in this server are collected again."
    };

    say_embed(ctx, message).await?;
    Ok(())
}
