use crate::CommandMeta;
use stealemoji_core::{Context, Error};
use stealemoji_database::impls::stolen_emojis::clear_stolen_emojis;
use stealemoji_utils::embed::{say_embed, tick};
use tracing::info;

pub const META: CommandMeta = CommandMeta {
    name: "clearemojis",
    desc: "Removes the history of all stolen emojis. Will not delete emojis from server banks.",
    category: "emoji",
    usage: "!stealemoji clearemojis [true]",
};

pub fn clear_warning() -> String {
    format!(
        "This will reset all stolen emoji data.\n\
         If you want to continue, run this command again as:\n\
         `{}stealemoji clearemojis true`",
        stealemoji_utils::COMMAND_PREFIX
    )
}

#[poise::command(prefix_command, slash_command, owners_only, category = "Emoji")]
pub async fn clearemojis(
    ctx: Context<'_>,
    #[description = "Confirm clearing every stolen emoji record"] confirm: Option<bool>,
) -> Result<(), Error> {
    if !confirm.unwrap_or(false) {
        say_embed(ctx, clear_warning()).await?;
        return Ok(());
    }

    let removed = clear_stolen_emojis(&ctx.data().db).await?;
    info!(removed, "cleared stolen emoji records");

    tick(ctx).await?;
    Ok(())
}
