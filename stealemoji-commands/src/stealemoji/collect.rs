use tracing::info;

use crate::CommandMeta;
use stealemoji_core::{Context, Error};
use stealemoji_utils::embed::say_embed;
use stealemoji_utils::formatting::enabled_label;

pub const META: CommandMeta = CommandMeta {
    name: "collect",
    desc: "Toggles whether emojis are collected or not.",
    category: "emoji",
    usage: "!stealemoji collect",
};

#[poise::command(prefix_command, slash_command, owners_only, category = "Emoji")]
pub async fn collect(ctx: Context<'_>) -> Result<(), Error> {
    let data = ctx.data();
    let enabled = data.collection.toggle(&data.db).await?;
    info!(enabled, "emoji collection toggled");

    say_embed(
        ctx,
        format!("Emoji collection is now **{}**.", enabled_label(enabled)),
    )
    .await?;
    Ok(())
}
