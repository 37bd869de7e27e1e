use std::time::Duration;

use poise::serenity_prelude as serenity;

use stealemoji_utils::confirmation::{ConfirmationResult, ReplyFilter, await_yes_no_reply};
use stealemoji_utils::embed::DEFAULT_EMBED_COLOR;

use crate::collector::approval::{
    APPROVAL_PROMPT, APPROVAL_TIMEOUT_NOTICE, APPROVAL_TITLE, AdminPrompter, PromptError,
};
use crate::collector::emoji::StolenEmoji;

/// [`AdminPrompter`] that talks to admins over Discord direct messages.
pub struct DiscordPrompter<'a> {
    ctx: &'a serenity::Context,
}

impl<'a> DiscordPrompter<'a> {
    pub fn new(ctx: &'a serenity::Context) -> Self {
        Self { ctx }
    }

    async fn resolve_user(&self, admin_id: u64) -> anyhow::Result<serenity::User> {
        if admin_id == 0 {
            anyhow::bail!("admin id 0 is not a valid user id");
        }
        let user_id = serenity::UserId::new(admin_id);

        let cached = self.ctx.cache.user(user_id).map(|user| serenity::User::clone(&user));
        if let Some(user) = cached {
            return Ok(user);
        }

        Ok(self.ctx.http.get_user(user_id).await?)
    }
}

pub fn approval_request_embed(emoji: &StolenEmoji) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(APPROVAL_TITLE)
        .description(APPROVAL_PROMPT)
        .color(DEFAULT_EMBED_COLOR)
        .image(emoji.url())
}

impl AdminPrompter for DiscordPrompter<'_> {
    async fn send_request(&self, admin_id: u64, emoji: &StolenEmoji) -> Result<u64, PromptError> {
        let user = self
            .resolve_user(admin_id)
            .await
            .map_err(PromptError::UnknownUser)?;

        let dm_channel = user
            .create_dm_channel(&self.ctx.http)
            .await
            .map_err(|e| PromptError::Undeliverable(e.into()))?;

        dm_channel
            .send_message(
                &self.ctx.http,
                serenity::CreateMessage::new().embed(approval_request_embed(emoji)),
            )
            .await
            .map_err(|e| PromptError::Undeliverable(e.into()))?;

        Ok(dm_channel.id.get())
    }

    async fn await_answer(&self, admin_id: u64, channel_id: u64, timeout: Duration) -> Option<bool> {
        let reply = await_yes_no_reply(
            &self.ctx.shard,
            serenity::UserId::new(admin_id),
            serenity::ChannelId::new(channel_id),
            Some(timeout),
            ReplyFilter::YesNoOnly,
        )
        .await;

        match reply {
            ConfirmationResult::Confirmed(_) => Some(true),
            ConfirmationResult::Declined(_) => Some(false),
            ConfirmationResult::TimedOut => None,
        }
    }

    async fn send_timeout_notice(&self, channel_id: u64) -> anyhow::Result<()> {
        serenity::ChannelId::new(channel_id)
            .say(&self.ctx.http, APPROVAL_TIMEOUT_NOTICE)
            .await?;
        Ok(())
    }
}
