use crate::CommandMeta;
use stealemoji_core::{Context, Error};
use stealemoji_database::impls::settings::{get_settings, set_notify_mode};
use stealemoji_database::model::settings::NotifyMode;
use stealemoji_utils::embed::say_embed;

pub const META: CommandMeta = CommandMeta {
    name: "notify",
    desc: "Cycles who is notified when an emoji is stolen: nobody, the bot owners, or this channel.",
    category: "emoji",
    usage: "!stealemoji notify",
};

pub fn notify_mode_message(mode: NotifyMode) -> &'static str {
    match mode {
        NotifyMode::Off => "Notifications are now off",
        NotifyMode::Owners => "Bot owner will now be notified when an emoji is stolen",
        NotifyMode::Channel(_) => "This channel will now be notified when an emoji is stolen",
    }
}

#[poise::command(prefix_command, slash_command, owners_only, category = "Emoji")]
pub async fn notify(ctx: Context<'_>) -> Result<(), Error> {
    let current = get_settings(&ctx.data().db).await?.notify;
    let next = current.next(ctx.channel_id().get());

    set_notify_mode(&ctx.data().db, next).await?;
    say_embed(ctx, notify_mode_message(next)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use stealemoji_database::model::settings::NotifyMode;

    use super::notify_mode_message;

    #[test]
    fn each_mode_has_its_own_message() {
        let messages = [
            notify_mode_message(NotifyMode::Off),
            notify_mode_message(NotifyMode::Owners),
            notify_mode_message(NotifyMode::Channel(77)),
        ];
        assert!(messages[0].contains("off"));
        assert!(messages[1].contains("owner"));
        assert!(messages[2].contains("channel"));
    }
}
