use anyhow::Context as _;

use crate::cache::{CONFIG_CACHE_TTL, admins_key, invalidate_admins};
use crate::database::Database;

/// Admin user ids in the order they were added.
pub async fn list_admins(db: &Database) -> anyhow::Result<Vec<u64>> {
    let cache_key = admins_key(db.cache());
    db.cache()
        .get_or_load_json(&cache_key, CONFIG_CACHE_TTL, || async {
            let ids: Vec<i64> =
                sqlx::query_scalar("SELECT user_id FROM emoji_admins ORDER BY position ASC")
                    .fetch_all(db.pool())
                    .await?;

            ids.into_iter()
                .map(|id| u64::try_from(id).context("user_id out of u64 range"))
                .collect()
        })
        .await
}

/// Add an admin. Returns `false` when the user was already on the list.
pub async fn add_admin(db: &Database, user_id: u64) -> anyhow::Result<bool> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let result = sqlx::query(
        "INSERT INTO emoji_admins (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING",
    )
    .bind(user_id_i64)
    .execute(db.pool())
    .await?;

    invalidate_admins(db.cache()).await?;

    Ok(result.rows_affected() > 0)
}

/// Remove an admin. Returns `false` when the user was not on the list.
pub async fn remove_admin(db: &Database, user_id: u64) -> anyhow::Result<bool> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let result = sqlx::query("DELETE FROM emoji_admins WHERE user_id = $1")
        .bind(user_id_i64)
        .execute(db.pool())
        .await?;

    invalidate_admins(db.cache()).await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use super::{add_admin, list_admins, remove_admin};
    use crate::{CacheService, Database};

    fn test_db(pool: PgPool) -> Database {
        Database::with_cache(pool, CacheService::disabled("stealemoji:test"))
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    async fn adding_an_admin_twice_keeps_one_entry(pool: PgPool) -> anyhow::Result<()> {
        let db = test_db(pool);

        assert!(add_admin(&db, 111).await?);
        assert!(!add_admin(&db, 111).await?);

        assert_eq!(list_admins(&db).await?, vec![111]);
        Ok(())
    }

    #[sqlx::test(migrator = "crate::MIGRATOR")]
    async fn removing_a_non_admin_changes_nothing(pool: PgPool) -> anyhow::Result<()> {
        let db = test_db(pool);
        add_admin(&db, 111).await?;
        add_admin(&db, 222).await?;

        assert!(!remove_admin(&db, 333).await?);
        assert_eq!(list_admins(&db).await?, vec![111, 222]);

        assert!(remove_admin(&db, 111).await?);
        assert_eq!(list_admins(&db).await?, vec![222]);
        Ok(())
    }
}
