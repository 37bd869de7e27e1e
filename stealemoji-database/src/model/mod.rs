pub mod settings;
pub mod stolen_emoji;
