use std::time::Duration;

use poise::serenity_prelude as serenity;
use tracing::{error, info, warn};

use crate::CommandMeta;
use crate::stealemoji::embeds::{guild_only_message, usage_message};
use stealemoji_core::{Context, Error};
use stealemoji_utils::confirmation::{ConfirmationResult, ReplyFilter, prompt_yes_no};
use stealemoji_utils::embed::{info_embed, say_embed};
use stealemoji_utils::permissions::{has_user_permission, is_missing_permissions_error};

pub const META: CommandMeta = CommandMeta {
    name: "deleteserver",
    desc: "Delete a server the bot owns. Useful for retired emoji banks.",
    category: "emoji",
    usage: "!stealemoji deleteserver [guild_id]",
};

const DELETE_CONFIRM_TIMEOUT_SECS: u64 = 120;

#[poise::command(
    prefix_command,
    slash_command,
    aliases("deleteguild"),
    category = "Emoji"
)]
pub async fn deleteserver(
    ctx: Context<'_>,
    #[description = "Id of the server to delete (defaults to this one)"] guild_id: Option<String>,
) -> Result<(), Error> {
    let Some(current_guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let target_id = match guild_id.as_deref().map(str::trim) {
        None | Some("") => current_guild_id,
        Some(raw) => match parse_guild_id(raw) {
            Some(id) => id,
            None => {
                ctx.say(usage_message(META.usage)).await?;
                return Ok(());
            }
        },
    };

    let author_is_owner = ctx.framework().options().owners.contains(&ctx.author().id);
    let targets_current = target_id == current_guild_id;
    let has_manage_guild = author_is_owner
        || has_user_permission(
            ctx.http(),
            current_guild_id,
            ctx.author().id,
            serenity::Permissions::MANAGE_GUILD,
        )
        .await?;

    if !may_delete(author_is_owner, targets_current, has_manage_guild) {
        warn!(
            user_id = %ctx.author().id,
            guild_id = %target_id,
            "guild deletion refused"
        );
        let message = if targets_current {
            "You need the Manage Server permission to delete this server."
        } else {
            "Only the bot owner can delete a server other than this one."
        };
        say_embed(ctx, message).await?;
        return Ok(());
    }

    let Some(guild_name) = resolve_guild_name(ctx, target_id).await else {
        say_embed(ctx, "Failed to get guild, cancelling").await?;
        return Ok(());
    };

    let prompt = info_embed(format!(
        "Will attempt to delete {} ({})\nOkay to continue? (yes/no)",
        guild_name, target_id
    ));
    let answer = prompt_yes_no(
        ctx,
        prompt,
        Some(Duration::from_secs(DELETE_CONFIRM_TIMEOUT_SECS)),
        ReplyFilter::AnyMessage,
    )
    .await?;

    match answer {
        ConfirmationResult::TimedOut => {
            ctx.say("Timed out, canceling").await?;
            return Ok(());
        }
        ConfirmationResult::Declined(_) => {
            say_embed(ctx, "Cancelling").await?;
            return Ok(());
        }
        ConfirmationResult::Confirmed(_) => {}
    }

    if let Err(source) = target_id.delete(&ctx.serenity_context().http).await {
        let message = if is_missing_permissions_error(&source) {
            error!(?source, guild_id = %target_id, "no permission to delete guild");
            "No permission to delete. I'm probably not the guild owner"
        } else {
            error!(?source, guild_id = %target_id, "unexpected error when deleting guild");
            "Unexpected error when deleting guild"
        };
        say_embed(ctx, message).await?;
        return Ok(());
    }

    info!(guild_id = %target_id, guild_name = %guild_name, "guild deleted");

    let notice = format!("Guild {} deleted", guild_name);
    for owner in &ctx.framework().options().owners {
        let sent = match owner.create_dm_channel(ctx.serenity_context()).await {
            Ok(channel) => channel.say(&ctx.serenity_context().http, &notice).await.map(|_| ()),
            Err(source) => Err(source),
        };
        if let Err(source) = sent {
            warn!(?source, owner_id = %owner, "failed to tell owner about deleted guild");
        }
    }

    Ok(())
}

async fn resolve_guild_name(ctx: Context<'_>, guild_id: serenity::GuildId) -> Option<String> {
    let cached = ctx.cache().guild(guild_id).map(|guild| guild.name.clone());
    if cached.is_some() {
        return cached;
    }

    guild_id
        .to_partial_guild(ctx.http())
        .await
        .ok()
        .map(|guild| guild.name)
}

/// Owners may delete any guild the bot owns. Everyone else needs MANAGE_GUILD
/// and may only target the guild they are typing in.
fn may_delete(author_is_owner: bool, targets_current: bool, has_manage_guild: bool) -> bool {
    author_is_owner || (targets_current && has_manage_guild)
}

fn parse_guild_id(raw: &str) -> Option<serenity::GuildId> {
    raw.parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(serenity::GuildId::new)
}

#[cfg(test)]
mod tests {
    use super::{may_delete, parse_guild_id};

    #[test]
    fn parses_numeric_guild_ids() {
        assert_eq!(
            parse_guild_id("123456789012345678").map(|id| id.get()),
            Some(123_456_789_012_345_678)
        );
        assert_eq!(parse_guild_id("0"), None);
        assert_eq!(parse_guild_id("my-server"), None);
    }

    #[test]
    fn managers_cannot_delete_other_guilds() {
        assert!(!may_delete(false, false, true));
        assert!(!may_delete(false, false, false));
    }

    #[test]
    fn managers_may_delete_the_current_guild() {
        assert!(may_delete(false, true, true));
        assert!(!may_delete(false, true, false));
    }

    #[test]
    fn owners_may_delete_any_guild() {
        assert!(may_delete(true, false, false));
        assert!(may_delete(true, true, false));
    }
}
