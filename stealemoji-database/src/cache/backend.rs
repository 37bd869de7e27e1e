use deadpool_redis::{Config, Connection, Pool, Runtime};
use redis::AsyncCommands;

/// Storage behind [`super::CacheService`]. `Disabled` answers every read with a
/// miss and swallows writes, so callers always fall through to PostgreSQL.
#[derive(Clone, Debug)]
pub(crate) enum CacheBackend {
    Disabled,
    Redis(Pool),
}

impl CacheBackend {
    pub(crate) fn redis(redis_url: &str) -> anyhow::Result<Self> {
        let pool = Config::from_url(redis_url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| anyhow::anyhow!("failed to create redis pool: {e}"))?;

        Ok(Self::Redis(pool))
    }

    pub(crate) fn is_enabled(&self) -> bool {
        matches!(self, Self::Redis(_))
    }

    async fn connection(pool: &Pool) -> anyhow::Result<Connection> {
        pool.get()
            .await
            .map_err(|e| anyhow::anyhow!("failed to get redis connection: {e}"))
    }

    pub(crate) async fn get(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        let Self::Redis(pool) = self else {
            return Ok(None);
        };

        let mut conn = Self::connection(pool).await?;
        conn.get::<_, Option<Vec<u8>>>(key)
            .await
            .map_err(|e| anyhow::anyhow!("redis GET failed for key `{key}`: {e}"))
    }

    pub(crate) async fn set(&self, key: &str, value: Vec<u8>, ttl_seconds: u64) -> anyhow::Result<()> {
        let Self::Redis(pool) = self else {
            return Ok(());
        };

        let mut conn = Self::connection(pool).await?;
        conn.set_ex::<_, _, ()>(key, value, ttl_seconds)
            .await
            .map_err(|e| anyhow::anyhow!("redis SETEX failed for key `{key}`: {e}"))
    }

    pub(crate) async fn del(&self, key: &str) -> anyhow::Result<()> {
        let Self::Redis(pool) = self else {
            return Ok(());
        };

        let mut conn = Self::connection(pool).await?;
        conn.del::<_, u64>(key)
            .await
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("redis DEL failed for key `{key}`: {e}"))
    }

    pub(crate) async fn ping(&self) -> anyhow::Result<()> {
        let Self::Redis(pool) = self else {
            return Ok(());
        };

        let mut conn = Self::connection(pool).await?;
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("redis PING failed: {e}"))
    }
}
