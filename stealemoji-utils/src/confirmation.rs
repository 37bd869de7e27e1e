use std::time::Duration;

use poise::serenity_prelude as serenity;

use crate::formatting::{YesNo, parse_yes_no};

#[derive(Debug)]
pub enum ConfirmationResult {
    Confirmed(serenity::Message),
    Declined(serenity::Message),
    TimedOut,
}

/// Which replies end the wait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyFilter {
    /// The first message from the author counts; anything but yes is a decline.
    AnyMessage,
    /// Only yes/y/no/n are collected; other messages are ignored.
    YesNoOnly,
}

impl ReplyFilter {
    fn accepts(self, content: &str) -> bool {
        match self {
            Self::AnyMessage => true,
            Self::YesNoOnly => parse_yes_no(content).is_some(),
        }
    }
}

/// Wait for `author_id` to answer in `channel_id`. `None` waits indefinitely.
pub async fn await_yes_no_reply(
    shard: &serenity::ShardMessenger,
    author_id: serenity::UserId,
    channel_id: serenity::ChannelId,
    timeout: Option<Duration>,
    filter: ReplyFilter,
) -> ConfirmationResult {
    let mut collector = serenity::MessageCollector::new(shard)
        .author_id(author_id)
        .channel_id(channel_id)
        .filter(move |message: &serenity::Message| filter.accepts(&message.content));

    if let Some(timeout) = timeout {
        collector = collector.timeout(timeout);
    }

    let Some(reply) = collector.next().await else {
        return ConfirmationResult::TimedOut;
    };

    match parse_yes_no(&reply.content) {
        Some(YesNo::Yes) => ConfirmationResult::Confirmed(reply),
        _ => ConfirmationResult::Declined(reply),
    }
}

/// Post `prompt` and wait for the command author's answer in the same channel.
pub async fn prompt_yes_no<U, E>(
    ctx: poise::Context<'_, U, E>,
    prompt: serenity::CreateEmbed,
    timeout: Option<Duration>,
    filter: ReplyFilter,
) -> Result<ConfirmationResult, serenity::Error>
where
    U: Send + Sync,
    E: Send + Sync,
{
    ctx.send(poise::CreateReply::default().embed(prompt)).await?;

    Ok(await_yes_no_reply(
        &ctx.serenity_context().shard,
        ctx.author().id,
        ctx.channel_id(),
        timeout,
        filter,
    )
    .await)
}

#[cfg(test)]
mod tests {
    use super::ReplyFilter;

    #[test]
    fn yes_no_filter_ignores_chatter() {
        assert!(ReplyFilter::YesNoOnly.accepts("Y"));
        assert!(ReplyFilter::YesNoOnly.accepts("no"));
        assert!(!ReplyFilter::YesNoOnly.accepts("maybe later"));
    }

    #[test]
    fn any_message_filter_accepts_everything() {
        assert!(ReplyFilter::AnyMessage.accepts("maybe later"));
        assert!(ReplyFilter::AnyMessage.accepts(""));
    }
}
