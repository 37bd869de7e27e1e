//! Reaction-driven emoji collection.
//!
//! The bot's reaction handler calls [`screen_reaction`] and, for qualifying
//! reactions, spawns [`collect_emoji`], which runs the admin approval round and
//! then uploads the approved emoji to a bank and sends notifications.

pub mod approval;
pub mod bank;
pub mod capacity;
pub mod discord;
pub mod emoji;
pub mod notify;

use std::collections::HashSet;

use poise::serenity_prelude as serenity;
use tracing::{debug, error, info};

use stealemoji_core::Data;
use stealemoji_database::impls::disabled_guilds::is_guild_disabled;

use approval::{APPROVAL_TIMEOUT, ApprovalResult, run_approval};
use discord::DiscordPrompter;
use emoji::StolenEmoji;

/// Facts about a custom-emoji reaction that decide whether it is collected.
#[derive(Clone, Copy, Debug)]
pub struct ReactionGate {
    pub in_guild: bool,
    pub reactor_is_bot: bool,
    pub collection_on: bool,
    pub guild_disabled: bool,
}

impl ReactionGate {
    pub fn admits(&self) -> bool {
        self.in_guild && !self.reactor_is_bot && self.collection_on && !self.guild_disabled
    }
}

/// Decide whether a reaction should start an approval round.
///
/// Checks run cheapest first and stop at the first failing one.
pub async fn screen_reaction(
    ctx: &serenity::Context,
    data: &Data,
    reaction: &serenity::Reaction,
) -> anyhow::Result<Option<StolenEmoji>> {
    let Some(emoji) = StolenEmoji::from_reaction(&reaction.emoji) else {
        return Ok(None);
    };
    let Some(guild_id) = reaction.guild_id else {
        return Ok(None);
    };

    let reactor_is_bot = match reaction.member.as_ref() {
        Some(member) => member.user.bot,
        None => reaction.user(ctx).await?.bot,
    };
    if reactor_is_bot {
        return Ok(None);
    }

    let collection_on = data.collection.is_on(&data.db).await?;
    if !collection_on {
        return Ok(None);
    }

    let guild_disabled = is_guild_disabled(&data.db, guild_id.get()).await?;

    let gate = ReactionGate {
        in_guild: true,
        reactor_is_bot,
        collection_on,
        guild_disabled,
    };
    Ok(gate.admits().then_some(emoji))
}

/// Run the approval round for `emoji` and the follow-ups of an approval.
/// Failures are logged; nothing propagates to the event loop.
pub async fn collect_emoji(
    ctx: &serenity::Context,
    data: &Data,
    owners: &HashSet<serenity::UserId>,
    emoji: StolenEmoji,
) {
    let prompter = DiscordPrompter::new(ctx);
    let result = match run_approval(&data.db, &prompter, &emoji, APPROVAL_TIMEOUT).await {
        Ok(result) => result,
        Err(source) => {
            error!(?source, emoji = %emoji.key(), "emoji approval failed");
            return;
        }
    };

    let admin_id = match result {
        ApprovalResult::Approved { admin_id } => admin_id,
        ApprovalResult::NoAdmins => {
            debug!(emoji = %emoji.key(), "no emoji admins configured");
            return;
        }
        other => {
            debug!(emoji = %emoji.key(), ?other, "emoji not collected");
            return;
        }
    };

    info!(emoji = %emoji.key(), admin_id, "emoji stolen");

    if let Err(source) = bank::upload_to_bank(ctx, &data.db, &emoji).await {
        error!(?source, emoji = %emoji.key(), "failed to upload emoji to bank");
    }

    if let Err(source) = notify::notify_steal(ctx, &data.db, owners, &emoji, admin_id).await {
        error!(?source, emoji = %emoji.key(), "failed to send steal notification");
    }
}

#[cfg(test)]
mod tests {
    use super::ReactionGate;

    #[test]
    fn collection_off_blocks_everything() {
        let gate = ReactionGate {
            in_guild: true,
            reactor_is_bot: false,
            collection_on: false,
            guild_disabled: false,
        };
        assert!(!gate.admits());
    }

    #[test]
    fn bots_and_disabled_guilds_are_ignored() {
        let bot = ReactionGate {
            in_guild: true,
            reactor_is_bot: true,
            collection_on: true,
            guild_disabled: false,
        };
        let disabled = ReactionGate {
            in_guild: true,
            reactor_is_bot: false,
            collection_on: true,
            guild_disabled: true,
        };
        assert!(!bot.admits());
        assert!(!disabled.admits());
    }

    #[test]
    fn human_reaction_with_collection_on_is_admitted() {
        let gate = ReactionGate {
            in_guild: true,
            reactor_is_bot: false,
            collection_on: true,
            guild_disabled: false,
        };
        assert!(gate.admits());
    }

    #[test]
    fn reactions_outside_guilds_are_ignored() {
        let gate = ReactionGate {
            in_guild: false,
            reactor_is_bot: false,
            collection_on: true,
            guild_disabled: false,
        };
        assert!(!gate.admits());
    }
}
