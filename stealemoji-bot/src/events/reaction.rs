use std::collections::HashSet;

use poise::serenity_prelude as serenity;
use tracing::error;

use stealemoji_commands::collector::{collect_emoji, screen_reaction};
use stealemoji_core::Data;

/// Start an approval round for a new custom-emoji reaction.
///
/// The round waits on admin DMs for up to a minute per admin, so it runs on
/// its own task instead of holding up the event handler.
pub async fn handle_reaction_add_collector(
    ctx: &serenity::Context,
    data: &Data,
    owners: &HashSet<serenity::UserId>,
    reaction: &serenity::Reaction,
) {
    let emoji = match screen_reaction(ctx, data, reaction).await {
        Ok(Some(emoji)) => emoji,
        Ok(None) => return,
        Err(source) => {
            error!(?source, "failed to screen reaction for emoji collection");
            return;
        }
    };

    let ctx = ctx.clone();
    let data = data.clone();
    let owners = owners.clone();
    tokio::spawn(async move {
        collect_emoji(&ctx, &data, &owners, emoji).await;
    });
}
