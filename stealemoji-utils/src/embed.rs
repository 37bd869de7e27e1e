use poise::serenity_prelude as serenity;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0xF1_C4_0F;

pub const TICK_EMOJI: char = '\u{2705}';

/// Plain informational embed with the default color.
pub fn info_embed(description: impl Into<String>) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .color(DEFAULT_EMBED_COLOR)
        .description(description)
}

/// Reply to the invoking command with `description` wrapped in an embed.
pub async fn say_embed<U, E>(
    ctx: poise::Context<'_, U, E>,
    description: impl Into<String>,
) -> Result<(), serenity::Error>
where
    U: Send + Sync,
    E: Send + Sync,
{
    ctx.send(poise::CreateReply::default().embed(info_embed(description)))
        .await?;
    Ok(())
}

/// Acknowledge a command. Prefix invocations get a check-mark reaction,
/// slash invocations get a short reply since there is no message to react to.
pub async fn tick<U, E>(ctx: poise::Context<'_, U, E>) -> Result<(), serenity::Error>
where
    U: Send + Sync,
    E: Send + Sync,
{
    match ctx {
        poise::Context::Prefix(prefix) => {
            prefix
                .msg
                .react(ctx.serenity_context(), TICK_EMOJI)
                .await?;
        }
        poise::Context::Application(_) => {
            ctx.say(TICK_EMOJI.to_string()).await?;
        }
    }

    Ok(())
}
