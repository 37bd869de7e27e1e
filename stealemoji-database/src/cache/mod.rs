mod backend;

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use backend::CacheBackend;

/// TTL for the settings row and the small id lists.
pub const CONFIG_CACHE_TTL: Duration = Duration::from_secs(300);

#[derive(Clone, Debug)]
pub struct CacheService {
    key_prefix: String,
    backend: CacheBackend,
}

impl CacheService {
    pub fn disabled(prefix: impl Into<String>) -> Self {
        Self {
            key_prefix: prefix.into(),
            backend: CacheBackend::Disabled,
        }
    }

    pub fn redis(redis_url: &str, prefix: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            key_prefix: prefix.into(),
            backend: CacheBackend::redis(redis_url)?,
        })
    }

    pub fn is_redis_enabled(&self) -> bool {
        self.backend.is_enabled()
    }

    pub async fn ping(&self) -> anyhow::Result<()> {
        self.backend.ping().await
    }

    pub fn key(&self, suffix: impl AsRef<str>) -> String {
        format!("{}:{}", self.key_prefix, suffix.as_ref())
    }

    pub async fn get_json<T>(&self, key: &str) -> anyhow::Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.backend.get(key).await? {
            Some(bytes) => {
                let parsed = serde_json::from_slice(&bytes).map_err(|e| {
                    anyhow::anyhow!("failed to deserialize cache value for `{key}`: {e}")
                })?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    pub async fn set_json<T>(&self, key: &str, value: &T, ttl: Duration) -> anyhow::Result<()>
    where
        T: Serialize,
    {
        let payload = serde_json::to_vec(value)
            .map_err(|e| anyhow::anyhow!("failed to serialize cache value for `{key}`: {e}"))?;

        self.backend.set(key, payload, ttl.as_secs().max(1)).await
    }

    pub async fn del(&self, key: &str) -> anyhow::Result<()> {
        self.backend.del(key).await
    }

    pub async fn get_or_load_json<T, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        loader: F,
    ) -> anyhow::Result<T>
    where
        T: Serialize + DeserializeOwned + Clone,
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        match self.get_json::<T>(key).await {
            Ok(Some(cached)) => return Ok(cached),
            Ok(None) => {}
            Err(e) => warn!(
                ?e,
                cache_key = key,
                "cache get failed; falling back to database"
            ),
        }

        let loaded = loader().await?;

        if let Err(e) = self.set_json(key, &loaded, ttl).await {
            warn!(
                ?e,
                cache_key = key,
                "cache set failed; returning database value"
            );
        }

        Ok(loaded)
    }
}

pub fn settings_key(cache: &CacheService) -> String {
    cache.key("settings")
}

pub fn admins_key(cache: &CacheService) -> String {
    cache.key("admins")
}

pub fn guild_banks_key(cache: &CacheService) -> String {
    cache.key("guild_banks")
}

pub fn disabled_guilds_key(cache: &CacheService) -> String {
    cache.key("disabled_guilds")
}

pub async fn invalidate_settings(cache: &CacheService) -> anyhow::Result<()> {
    cache.del(&settings_key(cache)).await
}

pub async fn invalidate_admins(cache: &CacheService) -> anyhow::Result<()> {
    cache.del(&admins_key(cache)).await
}

pub async fn invalidate_guild_banks(cache: &CacheService) -> anyhow::Result<()> {
    cache.del(&guild_banks_key(cache)).await
}

pub async fn invalidate_disabled_guilds(cache: &CacheService) -> anyhow::Result<()> {
    cache.del(&disabled_guilds_key(cache)).await
}

#[cfg(test)]
mod tests {
    use super::{CacheService, admins_key, settings_key};

    #[test]
    fn keys_are_prefixed() {
        let cache = CacheService::disabled("stealemoji:test");
        assert_eq!(settings_key(&cache), "stealemoji:test:settings");
        assert_eq!(admins_key(&cache), "stealemoji:test:admins");
        assert!(!cache.is_redis_enabled());
    }

    #[tokio::test]
    async fn disabled_cache_always_loads() {
        let cache = CacheService::disabled("stealemoji:test");
        let key = cache.key("value");

        let first: u64 = cache
            .get_or_load_json(&key, super::CONFIG_CACHE_TTL, || async { Ok(7) })
            .await
            .unwrap();
        let second: u64 = cache
            .get_or_load_json(&key, super::CONFIG_CACHE_TTL, || async { Ok(9) })
            .await
            .unwrap();

        assert_eq!(first, 7);
        assert_eq!(second, 9);
    }
}
