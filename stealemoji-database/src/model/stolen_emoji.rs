use serde::{Deserialize, Serialize};

/// A persisted stolen emoji, keyed by its message form (`<:name:id>`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StolenEmojiRecord {
    pub emoji_key: String,
    pub emoji_id: u64,
    pub name: String,
    pub animated: bool,
    pub url: String,
    /// Id of the re-uploaded copy in a bank guild, once one exists.
    pub saved_emoji_id: Option<u64>,
    pub approved_by: u64,
    pub created_at: u64,
}

#[derive(Clone, Copy, Debug)]
pub struct NewStolenEmoji<'a> {
    pub emoji_key: &'a str,
    pub emoji_id: u64,
    pub name: &'a str,
    pub animated: bool,
    pub url: &'a str,
    pub approved_by: u64,
}
