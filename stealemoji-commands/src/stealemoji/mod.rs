//! The `stealemoji` command group.

pub mod addadmin;
pub mod autobank;
pub mod bank;
pub mod clearemojis;
pub mod collect;
pub mod deleteserver;
pub(crate) mod embeds;
pub mod ignoreguild;
pub mod notify;
pub mod print;
pub mod removeadmin;

use addadmin::addadmin;
use autobank::autobank;
use bank::bank;
use clearemojis::clearemojis;
use collect::collect;
use deleteserver::deleteserver;
use ignoreguild::ignoreguild;
use notify::notify;
use print::print;
use removeadmin::removeadmin;

use crate::{COMMANDS, CommandMeta};
use stealemoji_core::{Context, Error};
use stealemoji_utils::embed::DEFAULT_EMBED_COLOR;

use poise::serenity_prelude as serenity;

pub const META: CommandMeta = CommandMeta {
    name: "stealemoji",
    desc: "Base command for emoji stealing. Lists the subcommands.",
    category: "emoji",
    usage: "!stealemoji",
};

#[poise::command(
    prefix_command,
    slash_command,
    category = "Emoji",
    subcommands(
        "clearemojis",
        "print",
        "notify",
        "collect",
        "autobank",
        "deleteserver",
        "bank",
        "addadmin",
        "removeadmin",
        "ignoreguild"
    )
)]
pub async fn stealemoji(ctx: Context<'_>) -> Result<(), Error> {
    let embed = serenity::CreateEmbed::new()
        .title("Emoji Stealing")
        .color(DEFAULT_EMBED_COLOR)
        .description(subcommand_help());

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

fn subcommand_help() -> String {
    COMMANDS
        .iter()
        .filter(|command| command.name != META.name)
        .map(|command| format!("`{}`\n{}", command.usage, command.desc))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::subcommand_help;

    #[test]
    fn help_lists_every_subcommand() {
        let help = subcommand_help();
        for name in [
            "clearemojis",
            "print",
            "notify",
            "collect",
            "autobank",
            "deleteserver",
            "bank",
            "addadmin",
            "removeadmin",
            "ignoreguild",
        ] {
            assert!(help.contains(&format!("!stealemoji {name}")), "{name} missing");
        }
        assert!(!help.contains("`!stealemoji`\n"));
    }
}
