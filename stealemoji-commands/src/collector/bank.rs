use poise::serenity_prelude as serenity;
use tracing::{info, warn};

use stealemoji_database::Database;
use stealemoji_database::impls::guild_banks::list_guild_banks;
use stealemoji_database::impls::settings::get_settings;
use stealemoji_database::impls::stolen_emojis::set_saved_emoji_id;

use crate::collector::capacity::{has_emoji_capacity, nominal_emoji_limit};
use crate::collector::emoji::StolenEmoji;

/// Find the first bank guild with a free slot of the right kind.
fn first_bank_with_room(
    cache: &serenity::Cache,
    banks: &[u64],
    animated: bool,
) -> Option<serenity::GuildId> {
    banks
        .iter()
        .filter(|id| **id != 0)
        .map(|id| serenity::GuildId::new(*id))
        .find(|guild_id| {
            let Some(guild) = cache.guild(*guild_id) else {
                return false;
            };
            has_emoji_capacity(
                nominal_emoji_limit(guild.premium_tier),
                guild.emojis.values().map(|emoji| emoji.animated),
                animated,
            )
        })
}

/// Upload a copy of `emoji` into a bank guild and remember the copy's id.
///
/// Returns the created emoji, or `None` when no bank guild has room.
pub async fn upload_to_bank(
    ctx: &serenity::Context,
    db: &Database,
    emoji: &StolenEmoji,
) -> anyhow::Result<Option<serenity::Emoji>> {
    let banks = list_guild_banks(db).await?;
    let Some(guild_id) = first_bank_with_room(&ctx.cache, &banks, emoji.animated) else {
        if get_settings(db).await?.autobank {
            warn!(
                emoji = %emoji.key(),
                "no emoji bank has room; add a new bank server with `stealemoji bank`"
            );
        } else {
            info!(emoji = %emoji.key(), "no emoji bank with room; copy not uploaded");
        }
        return Ok(None);
    };

    let image = serenity::CreateAttachment::url(&ctx.http, &emoji.url()).await?;
    let created = guild_id
        .create_emoji(&ctx.http, &emoji.name, &image.to_base64())
        .await?;

    set_saved_emoji_id(db, &emoji.key(), created.id.get()).await?;
    info!(
        guild_id = %guild_id,
        saved_emoji_id = %created.id,
        "uploaded stolen emoji to bank"
    );

    Ok(Some(created))
}
