pub mod collector;
pub mod stealemoji;

use stealemoji_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    stealemoji::META,
    stealemoji::clearemojis::META,
    stealemoji::print::META,
    stealemoji::notify::META,
    stealemoji::collect::META,
    stealemoji::autobank::META,
    stealemoji::deleteserver::META,
    stealemoji::bank::META,
    stealemoji::addadmin::META,
    stealemoji::removeadmin::META,
    stealemoji::ignoreguild::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![stealemoji::stealemoji()]
}

/// Usage string for a command by its qualified name (`stealemoji bank`).
pub fn usage_for(qualified_name: &str) -> Option<&'static str> {
    let lookup = qualified_name.rsplit(' ').next().unwrap_or(qualified_name);
    COMMANDS
        .iter()
        .find(|command| command.name == lookup)
        .map(|command| command.usage)
}

#[cfg(test)]
mod tests {
    use super::{COMMANDS, usage_for};

    #[test]
    fn command_names_are_unique() {
        let mut names: Vec<&str> = COMMANDS.iter().map(|command| command.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COMMANDS.len());
    }

    #[test]
    fn usage_uses_leaf_name() {
        assert_eq!(usage_for("stealemoji bank"), Some("!stealemoji bank"));
        assert_eq!(usage_for("stealemoji"), Some("!stealemoji"));
        assert_eq!(usage_for("nope"), None);
    }
}
