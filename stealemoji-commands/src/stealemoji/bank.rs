use poise::serenity_prelude as serenity;
use tracing::info;

use crate::CommandMeta;
use crate::stealemoji::embeds::guild_only_message;
use stealemoji_core::{Context, Error};
use stealemoji_database::impls::guild_banks::{is_guild_bank, toggle_guild_bank};
use stealemoji_utils::confirmation::{ConfirmationResult, ReplyFilter, prompt_yes_no};
use stealemoji_utils::embed::{info_embed, say_embed};
use stealemoji_utils::permissions::has_user_permission;

pub const META: CommandMeta = CommandMeta {
    name: "bank",
    desc: "Add or remove the current server as an emoji bank.",
    category: "emoji",
    usage: "!stealemoji bank",
};

fn bank_prompt(already_a_bank: bool) -> &'static str {
    if already_a_bank {
        "This is already an emoji bank\n\
         Are you sure you want to remove the current server from the emoji bank list? (y/n)"
    } else {
        "This will upload custom emojis to this server\n\
         Are you sure you want to make the current server an emoji bank? (y/n)"
    }
}

fn bank_result(is_bank_now: bool) -> &'static str {
    if is_bank_now {
        "This server has been added to be an emoji bank"
    } else {
        "This server has been removed from being an emoji bank"
    }
}

#[poise::command(prefix_command, slash_command, category = "Emoji")]
pub async fn bank(ctx: Context<'_>) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if !has_user_permission(
        ctx.http(),
        guild_id,
        ctx.author().id,
        serenity::Permissions::MANAGE_GUILD,
    )
    .await?
    {
        return Ok(());
    }

    let already_a_bank = is_guild_bank(&ctx.data().db, guild_id.get()).await?;

    let answer = prompt_yes_no(
        ctx,
        info_embed(bank_prompt(already_a_bank)),
        None,
        ReplyFilter::YesNoOnly,
    )
    .await?;

    let ConfirmationResult::Confirmed(_) = answer else {
        say_embed(ctx, "Cancelled").await?;
        return Ok(());
    };

    let is_bank_now = toggle_guild_bank(&ctx.data().db, guild_id.get()).await?;
    info!(guild_id = %guild_id, is_bank_now, "emoji bank membership toggled");

    say_embed(ctx, bank_result(is_bank_now)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{bank_prompt, bank_result};

    #[test]
    fn prompt_matches_current_membership() {
        assert!(bank_prompt(true).contains("remove"));
        assert!(bank_prompt(false).contains("make the current server an emoji bank"));
    }

    #[test]
    fn result_matches_new_membership() {
        assert!(bank_result(true).contains("added"));
        assert!(bank_result(false).contains("removed"));
    }
}
