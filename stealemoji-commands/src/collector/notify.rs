use std::collections::HashSet;

use poise::serenity_prelude as serenity;
use tracing::warn;

use stealemoji_database::Database;
use stealemoji_database::impls::settings::get_settings;
use stealemoji_database::model::settings::NotifyMode;
use stealemoji_utils::embed::DEFAULT_EMBED_COLOR;

use crate::collector::emoji::StolenEmoji;

pub fn steal_notice_embed(emoji: &StolenEmoji, approved_by: u64) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title("Emoji Stolen")
        .description(format!(
            "**Emoji :** `{}`\n**Approved by :** <@{}>",
            emoji.key(),
            approved_by
        ))
        .thumbnail(emoji.url())
        .color(DEFAULT_EMBED_COLOR)
}

/// Tell whoever the notify setting points at that an emoji was stolen.
pub async fn notify_steal(
    ctx: &serenity::Context,
    db: &Database,
    owners: &HashSet<serenity::UserId>,
    emoji: &StolenEmoji,
    approved_by: u64,
) -> anyhow::Result<()> {
    match get_settings(db).await?.notify {
        NotifyMode::Off => {}
        NotifyMode::Owners => {
            for owner in owners {
                let sent = match owner.create_dm_channel(ctx).await {
                    Ok(channel) => channel
                        .send_message(
                            &ctx.http,
                            serenity::CreateMessage::new()
                                .embed(steal_notice_embed(emoji, approved_by)),
                        )
                        .await
                        .map(|_| ()),
                    Err(source) => Err(source),
                };

                if let Err(source) = sent {
                    warn!(?source, owner_id = %owner, "failed to notify owner of stolen emoji");
                }
            }
        }
        NotifyMode::Channel(channel_id) => {
            serenity::ChannelId::new(channel_id)
                .send_message(
                    &ctx.http,
                    serenity::CreateMessage::new().embed(steal_notice_embed(emoji, approved_by)),
                )
                .await?;
        }
    }

    Ok(())
}
