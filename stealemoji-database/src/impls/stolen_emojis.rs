use anyhow::Context as _;

use crate::database::Database;
use crate::model::stolen_emoji::{NewStolenEmoji, StolenEmojiRecord};

pub async fn is_emoji_recorded(db: &Database, emoji_key: &str) -> anyhow::Result<bool> {
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM stolen_emojis WHERE emoji_key = $1)")
            .bind(emoji_key)
            .fetch_one(db.pool())
            .await?;

    Ok(exists)
}

/// Persist an approved emoji. Returns `false` if the key was already recorded.
pub async fn record_stolen_emoji(db: &Database, emoji: NewStolenEmoji<'_>) -> anyhow::Result<bool> {
    let emoji_id_i64 = i64::try_from(emoji.emoji_id).context("emoji_id out of i64 range")?;
    let approved_by_i64 =
        i64::try_from(emoji.approved_by).context("approved_by out of i64 range")?;

    let result = sqlx::query(
        "INSERT INTO stolen_emojis (emoji_key, emoji_id, name, animated, url, approved_by)
         VALUES ($1, $2, $3, $4, $5, $6)
         ON CONFLICT (emoji_key) DO NOTHING",
    )
    .bind(emoji.emoji_key)
    .bind(emoji_id_i64)
    .bind(emoji.name)
    .bind(emoji.animated)
    .bind(emoji.url)
    .bind(approved_by_i64)
    .execute(db.pool())
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Attach the id of the copy uploaded to a bank guild.
pub async fn set_saved_emoji_id(
    db: &Database,
    emoji_key: &str,
    saved_emoji_id: u64,
) -> anyhow::Result<()> {
    let saved_i64 = i64::try_from(saved_emoji_id).context("saved_emoji_id out of i64 range")?;

    sqlx::query("UPDATE stolen_emojis SET saved_emoji_id = $2 WHERE emoji_key = $1")
        .bind(emoji_key)
        .bind(saved_i64)
        .execute(db.pool())
        .await?;

    Ok(())
}

pub async fn list_stolen_emojis(db: &Database) -> anyhow::Result<Vec<StolenEmojiRecord>> {
    let rows = sqlx::query_as::<_, (String, i64, String, bool, String, Option<i64>, i64, i64)>(
        "SELECT emoji_key, emoji_id, name, animated, url, saved_emoji_id, approved_by, created_at
         FROM stolen_emojis
         ORDER BY created_at ASC, emoji_key ASC",
    )
    .fetch_all(db.pool())
    .await?;

    rows.into_iter()
        .map(
            |(emoji_key, emoji_id, name, animated, url, saved_emoji_id, approved_by, created_at)| {
                Ok(StolenEmojiRecord {
                    emoji_key,
                    emoji_id: u64::try_from(emoji_id).context("emoji_id out of u64 range")?,
                    name,
                    animated,
                    url,
                    saved_emoji_id: saved_emoji_id
                        .map(u64::try_from)
                        .transpose()
                        .context("saved_emoji_id out of u64 range")?,
                    approved_by: u64::try_from(approved_by)
                        .context("approved_by out of u64 range")?,
                    created_at: u64::try_from(created_at).context("created_at out of u64 range")?,
                })
            },
        )
        .collect()
}

/// Forget every stolen emoji. Copies already uploaded to bank guilds stay.
pub async fn clear_stolen_emojis(db: &Database) -> anyhow::Result<u64> {
    let result = sqlx::query("DELETE FROM stolen_emojis")
        .execute(db.pool())
        .await?;

    Ok(result.rows_affected())
}
