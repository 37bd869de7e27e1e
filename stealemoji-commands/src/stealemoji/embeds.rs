pub fn usage_message(usage: &str) -> String {
    format!("Usage: `{usage}`")
}

pub fn guild_only_message() -> &'static str {
    "This command only works in servers."
}

pub fn user_display_name(user: &poise::serenity_prelude::User) -> String {
    user.global_name.clone().unwrap_or_else(|| user.name.clone())
}
