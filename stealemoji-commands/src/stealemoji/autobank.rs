use crate::CommandMeta;
use stealemoji_core::{Context, Error};
use stealemoji_database::impls::settings::toggle_autobank;
use stealemoji_utils::embed::say_embed;
use stealemoji_utils::formatting::enabled_label;

pub const META: CommandMeta = CommandMeta {
    name: "autobank",
    desc: "Toggles warning when stolen emojis need a new bank server.",
    category: "emoji",
    usage: "!stealemoji autobank",
};

#[poise::command(prefix_command, slash_command, owners_only, category = "Emoji")]
pub async fn autobank(ctx: Context<'_>) -> Result<(), Error> {
    let enabled = toggle_autobank(&ctx.data().db).await?;

    say_embed(
        ctx,
        format!("AutoBanking is now **{}**.", enabled_label(enabled)),
    )
    .await?;
    Ok(())
}
