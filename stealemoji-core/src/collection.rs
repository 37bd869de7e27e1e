//! In-memory mirror of the persisted collection toggle.
//!
//! The reaction handler reads this on every custom-emoji reaction, so it is
//! kept in memory instead of hitting the store each time. It is filled on
//! startup via [`CollectionSwitch::refresh`], lazily on first read if startup
//! could not load it, and written through by the `collect` command.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use stealemoji_database::Database;
use stealemoji_database::impls::settings::{get_collect_on, toggle_collect_on};

#[derive(Clone, Debug, Default)]
pub struct CollectionSwitch {
    state: Arc<RwLock<Option<bool>>>,
}

impl CollectionSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload the flag from the store, replacing whatever was cached.
    pub async fn refresh(&self, db: &Database) -> anyhow::Result<bool> {
        let enabled = get_collect_on(db).await?;
        *self.state.write().await = Some(enabled);
        debug!(enabled, "collection switch refreshed");
        Ok(enabled)
    }

    pub async fn is_on(&self, db: &Database) -> anyhow::Result<bool> {
        if let Some(enabled) = *self.state.read().await {
            return Ok(enabled);
        }

        self.refresh(db).await
    }

    /// Flip the persisted flag and cache the stored result.
    pub async fn toggle(&self, db: &Database) -> anyhow::Result<bool> {
        let mut guard = self.state.write().await;
        let enabled = toggle_collect_on(db).await?;
        *guard = Some(enabled);
        Ok(enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::CollectionSwitch;

    #[tokio::test]
    async fn starts_unloaded() {
        let switch = CollectionSwitch::new();
        assert_eq!(*switch.state.read().await, None);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let switch = CollectionSwitch::new();
        let clone = switch.clone();
        *switch.state.write().await = Some(true);
        assert_eq!(*clone.state.read().await, Some(true));
    }
}
