use anyhow::Context as _;

use crate::cache::{CONFIG_CACHE_TTL, guild_banks_key, invalidate_guild_banks};
use crate::database::Database;

/// Bank guild ids in the order they were designated.
pub async fn list_guild_banks(db: &Database) -> anyhow::Result<Vec<u64>> {
    let cache_key = guild_banks_key(db.cache());
    db.cache()
        .get_or_load_json(&cache_key, CONFIG_CACHE_TTL, || async {
            let ids: Vec<i64> =
                sqlx::query_scalar("SELECT guild_id FROM emoji_guild_banks ORDER BY position ASC")
                    .fetch_all(db.pool())
                    .await?;

            ids.into_iter()
                .map(|id| u64::try_from(id).context("guild_id out of u64 range"))
                .collect()
        })
        .await
}

pub async fn is_guild_bank(db: &Database, guild_id: u64) -> anyhow::Result<bool> {
    Ok(list_guild_banks(db).await?.contains(&guild_id))
}

/// Add the guild to the bank list if absent, remove it otherwise.
/// Returns whether the guild is a bank afterwards.
pub async fn toggle_guild_bank(db: &Database, guild_id: u64) -> anyhow::Result<bool> {
    let guild_id_i64 = i64::try_from(guild_id).context("guild_id out of i64 range")?;

    let mut tx = db.pool().begin().await?;

    let removed = sqlx::query("DELETE FROM emoji_guild_banks WHERE guild_id = $1")
        .bind(guild_id_i64)
        .execute(&mut *tx)
        .await?
        .rows_affected()
        > 0;

    if !removed {
        sqlx::query(
            "INSERT INTO emoji_guild_banks (guild_id) VALUES ($1) ON CONFLICT (guild_id) DO NOTHING",
        )
        .bind(guild_id_i64)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    invalidate_guild_banks(db.cache()).await?;

    Ok(!removed)
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use super::{is_guild_bank, list_guild_banks, toggle_guild_bank};
    use crate::{CacheService, Database};

    fn test_db(pool: PgPool) -> Database {
        Database::with_cache(pool, CacheService::disabled("stealemoji:test"))
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    async fn toggling_twice_restores_bank_list(pool: PgPool) -> anyhow::Result<()> {
        let db = test_db(pool);
        toggle_guild_bank(&db, 10).await?;
        let before = list_guild_banks(&db).await?;

        assert!(toggle_guild_bank(&db, 20).await?);
        assert!(is_guild_bank(&db, 20).await?);
        assert!(!toggle_guild_bank(&db, 20).await?);

        assert_eq!(list_guild_banks(&db).await?, before);
        Ok(())
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    async fn banks_keep_designation_order(pool: PgPool) -> anyhow::Result<()> {
        let db = test_db(pool);
        for guild_id in [30, 10, 20] {
            toggle_guild_bank(&db, guild_id).await?;
        }

        assert_eq!(list_guild_banks(&db).await?, vec![30, 10, 20]);
        Ok(())
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    async fn concurrent_toggles_of_a_new_guild_do_not_fail(pool: PgPool) -> anyhow::Result<()> {
        let db = test_db(pool);
        let (first, second) = tokio::join!(toggle_guild_bank(&db, 40), toggle_guild_bank(&db, 40));
        first?;
        second?;

        assert!(list_guild_banks(&db).await?.iter().filter(|id| **id == 40).count() <= 1);
        Ok(())
    }
}
