pub mod admins;
pub mod disabled_guilds;
pub mod guild_banks;
pub mod settings;
pub mod stolen_emojis;
