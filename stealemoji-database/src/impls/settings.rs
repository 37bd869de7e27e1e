use crate::cache::{CONFIG_CACHE_TTL, invalidate_settings, settings_key};
use crate::database::Database;
use crate::model::settings::{NotifyMode, StealSettings};

pub async fn get_settings(db: &Database) -> anyhow::Result<StealSettings> {
    let cache_key = settings_key(db.cache());
    db.cache()
        .get_or_load_json(&cache_key, CONFIG_CACHE_TTL, || async {
            let row = sqlx::query_as::<_, (bool, bool, i64)>(
                "SELECT collect_on, autobank, notify FROM steal_settings WHERE id = 1",
            )
            .fetch_optional(db.pool())
            .await?;

            Ok(row
                .map(|(collect_on, autobank, notify)| StealSettings {
                    collect_on,
                    autobank,
                    notify: NotifyMode::from_raw(notify),
                })
                .unwrap_or_default())
        })
        .await
}

pub async fn get_collect_on(db: &Database) -> anyhow::Result<bool> {
    Ok(get_settings(db).await?.collect_on)
}

/// Flip the collection flag and return the new value.
pub async fn toggle_collect_on(db: &Database) -> anyhow::Result<bool> {
    let enabled: bool = sqlx::query_scalar(
        "INSERT INTO steal_settings (id, collect_on)
         VALUES (1, TRUE)
         ON CONFLICT (id) DO UPDATE SET collect_on = NOT steal_settings.collect_on
         RETURNING collect_on",
    )
    .fetch_one(db.pool())
    .await?;

    invalidate_settings(db.cache()).await?;

    Ok(enabled)
}

/// Flip the autobank flag and return the new value.
pub async fn toggle_autobank(db: &Database) -> anyhow::Result<bool> {
    let enabled: bool = sqlx::query_scalar(
        "INSERT INTO steal_settings (id, autobank)
         VALUES (1, TRUE)
         ON CONFLICT (id) DO UPDATE SET autobank = NOT steal_settings.autobank
         RETURNING autobank",
    )
    .fetch_one(db.pool())
    .await?;

    invalidate_settings(db.cache()).await?;

    Ok(enabled)
}

pub async fn set_notify_mode(db: &Database, mode: NotifyMode) -> anyhow::Result<()> {
    sqlx::query(
        "INSERT INTO steal_settings (id, notify)
         VALUES (1, $1)
         ON CONFLICT (id) DO UPDATE SET notify = EXCLUDED.notify",
    )
    .bind(mode.to_raw())
    .execute(db.pool())
    .await?;

    invalidate_settings(db.cache()).await?;

    Ok(())
}
