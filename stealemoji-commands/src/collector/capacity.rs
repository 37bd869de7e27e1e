use poise::serenity_prelude as serenity;

/// Per-class emoji slots a guild gets at its boost tier.
pub fn nominal_emoji_limit(tier: serenity::PremiumTier) -> usize {
    match tier {
        serenity::PremiumTier::Tier1 => 100,
        serenity::PremiumTier::Tier2 => 150,
        serenity::PremiumTier::Tier3 => 250,
        _ => 50,
    }
}

/// Whether a guild holding `existing` emojis (given as their animated flags)
/// has a free slot for one more emoji of the given kind.
///
/// Static and animated emojis have separate pools of `limit` slots each, so a
/// guild is full at `2 * limit`. Below `limit` in total there is always room.
pub fn has_emoji_capacity<I>(limit: usize, existing: I, animated: bool) -> bool
where
    I: IntoIterator<Item = bool>,
{
    let (animated_count, static_count) =
        existing
            .into_iter()
            .fold((0_usize, 0_usize), |(anim, stat), is_animated| {
                if is_animated {
                    (anim + 1, stat)
                } else {
                    (anim, stat + 1)
                }
            });
    let total = animated_count + static_count;

    if total >= limit.saturating_mul(2) {
        return false;
    }

    if total < limit {
        return true;
    }

    if animated {
        animated_count < limit
    } else {
        static_count < limit
    }
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude as serenity;

    use super::{has_emoji_capacity, nominal_emoji_limit};

    fn emojis(animated: usize, stat: usize) -> Vec<bool> {
        std::iter::repeat_n(true, animated)
            .chain(std::iter::repeat_n(false, stat))
            .collect()
    }

    #[test]
    fn limits_follow_boost_tier() {
        assert_eq!(nominal_emoji_limit(serenity::PremiumTier::Tier0), 50);
        assert_eq!(nominal_emoji_limit(serenity::PremiumTier::Tier1), 100);
        assert_eq!(nominal_emoji_limit(serenity::PremiumTier::Tier2), 150);
        assert_eq!(nominal_emoji_limit(serenity::PremiumTier::Tier3), 250);
    }

    #[test]
    fn room_when_under_nominal_limit() {
        assert!(has_emoji_capacity(50, emojis(0, 0), false));
        assert!(has_emoji_capacity(50, emojis(49, 0), false));
        assert!(has_emoji_capacity(50, emojis(0, 49), true));
    }

    #[test]
    fn full_at_double_the_limit() {
        assert!(!has_emoji_capacity(50, emojis(50, 50), true));
        assert!(!has_emoji_capacity(50, emojis(50, 50), false));
    }

    #[test]
    fn between_limits_checks_the_matching_pool() {
        assert!(!has_emoji_capacity(50, emojis(0, 50), false));
        assert!(has_emoji_capacity(50, emojis(0, 50), true));
        assert!(has_emoji_capacity(50, emojis(20, 50), true));
        assert!(!has_emoji_capacity(50, emojis(50, 20), true));
        assert!(has_emoji_capacity(50, emojis(50, 20), false));
    }
}
