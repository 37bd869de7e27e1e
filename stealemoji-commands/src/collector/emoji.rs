use poise::serenity_prelude as serenity;

const EMOJI_CDN_BASE: &str = "https://cdn.discordapp.com/emojis";

/// A custom (guild-uploaded) emoji observed in a reaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StolenEmoji {
    pub id: u64,
    pub name: String,
    pub animated: bool,
}

impl StolenEmoji {
    /// `None` for unicode reactions, and for custom emojis whose name Discord
    /// withheld (deleted or unavailable emojis).
    pub fn from_reaction(reaction: &serenity::ReactionType) -> Option<Self> {
        match reaction {
            serenity::ReactionType::Custom {
                animated,
                id,
                name: Some(name),
            } => Some(Self {
                id: id.get(),
                name: name.clone(),
                animated: *animated,
            }),
            _ => None,
        }
    }

    /// Message form of the emoji, used as the record key.
    pub fn key(&self) -> String {
        if self.animated {
            format!("<a:{}:{}>", self.name, self.id)
        } else {
            format!("<:{}:{}>", self.name, self.id)
        }
    }

    pub fn url(&self) -> String {
        format!(
            "{}/{}.{}",
            EMOJI_CDN_BASE,
            self.id,
            if self.animated { "gif" } else { "png" }
        )
    }
}
