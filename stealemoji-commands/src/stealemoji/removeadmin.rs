use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::stealemoji::embeds::user_display_name;
use stealemoji_core::{Context, Error};
use stealemoji_database::impls::admins::remove_admin;

pub const META: CommandMeta = CommandMeta {
    name: "removeadmin",
    desc: "Remove a user from the list of admins who approve stolen emojis.",
    category: "emoji",
    usage: "!stealemoji removeadmin <user>",
};

#[poise::command(prefix_command, slash_command, owners_only, category = "Emoji")]
pub async fn removeadmin(
    ctx: Context<'_>,
    #[description = "User to remove from the admin list"] user: serenity::User,
) -> Result<(), Error> {
    let removed = remove_admin(&ctx.data().db, user.id.get()).await?;
    let name = user_display_name(&user);

    if removed {
        ctx.say(format!("Removed {name} from the list of admins."))
            .await?;
    } else {
        ctx.say(format!("{name} was not on the list of admins."))
            .await?;
    }

    Ok(())
}
