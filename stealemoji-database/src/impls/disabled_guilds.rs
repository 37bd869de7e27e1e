use anyhow::Context as _;

use crate::cache::{CONFIG_CACHE_TTL, disabled_guilds_key, invalidate_disabled_guilds};
use crate::database::Database;

pub async fn is_guild_disabled(db: &Database, guild_id: u64) -> anyhow::Result<bool> {
    let cache_key = disabled_guilds_key(db.cache());
    let disabled: Vec<u64> = db
        .cache()
        .get_or_load_json(&cache_key, CONFIG_CACHE_TTL, || async {
            let ids: Vec<i64> = sqlx::query_scalar("SELECT guild_id FROM emoji_disabled_guilds")
                .fetch_all(db.pool())
                .await?;

            ids.into_iter()
                .map(|id| u64::try_from(id).context("guild_id out of u64 range"))
                .collect()
        })
        .await?;

    Ok(disabled.contains(&guild_id))
}

/// Toggle whether collection is ignored in a guild. Returns `true` if the guild
/// is now ignored.
pub async fn toggle_guild_disabled(db: &Database, guild_id: u64) -> anyhow::Result<bool> {
    let guild_id_i64 = i64::try_from(guild_id).context("guild_id out of i64 range")?;

    let mut tx = db.pool().begin().await?;

    let removed = sqlx::query("DELETE FROM emoji_disabled_guilds WHERE guild_id = $1")
        .bind(guild_id_i64)
        .execute(&mut *tx)
        .await?
        .rows_affected()
        > 0;

    if !removed {
        sqlx::query("INSERT INTO emoji_disabled_guilds (guild_id) VALUES ($1)")
            .bind(guild_id_i64)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    invalidate_disabled_guilds(db.cache()).await?;

    Ok(!removed)
}
