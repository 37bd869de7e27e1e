use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::stealemoji::embeds::user_display_name;
use stealemoji_core::{Context, Error};
use stealemoji_database::impls::admins::add_admin;

pub const META: CommandMeta = CommandMeta {
    name: "addadmin",
    desc: "Add a user to the list of admins who approve stolen emojis.",
    category: "emoji",
    usage: "!stealemoji addadmin <user>",
};

#[poise::command(prefix_command, slash_command, owners_only, category = "Emoji")]
pub async fn addadmin(
    ctx: Context<'_>,
    #[description = "User who will approve stolen emojis"] user: serenity::User,
) -> Result<(), Error> {
    let added = add_admin(&ctx.data().db, user.id.get()).await?;
    let name = user_display_name(&user);

    if added {
        ctx.say(format!("Added {name} to the list of admins."))
            .await?;
    } else {
        ctx.say(format!("{name} is already on the list of admins."))
            .await?;
    }

    Ok(())
}
