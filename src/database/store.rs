use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use super::{Database, GuildConfig};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("configuration store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

/// Per-guild reminder configuration storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Write-through insert or update keyed by guild id; refreshes `updated_at`
    async fn upsert(&self, config: GuildConfig) -> Result<GuildConfig, StoreError>;

    /// `Ok(None)` when the guild has never been configured
    async fn get(&self, guild_id: &str) -> Result<Option<GuildConfig>, StoreError>;

    async fn get_all(&self) -> Result<Vec<GuildConfig>, StoreError>;

    /// Idempotent
    async fn delete(&self, guild_id: &str) -> Result<(), StoreError>;
}

#[async_trait]
impl ConfigStore for Database {
    async fn upsert(&self, config: GuildConfig) -> Result<GuildConfig, StoreError> {
        Ok(self.upsert_guild_config(&config).await?)
    }

    async fn get(&self, guild_id: &str) -> Result<Option<GuildConfig>, StoreError> {
        Ok(self.get_guild_config(guild_id).await?)
    }

    async fn get_all(&self) -> Result<Vec<GuildConfig>, StoreError> {
        Ok(self.get_all_guild_configs().await?)
    }

    async fn delete(&self, guild_id: &str) -> Result<(), StoreError> {
        Ok(self.delete_guild_config(guild_id).await?)
    }
}

/// Process-local store used when no database is configured.
/// Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryStore {
    configs: DashMap<String, GuildConfig>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigStore for InMemoryStore {
    async fn upsert(&self, mut config: GuildConfig) -> Result<GuildConfig, StoreError> {
        let now = Utc::now();
        config.updated_at = now;
        if let Some(existing) = self.configs.get(&config.guild_id) {
            config.created_at = existing.created_at;
        } else {
            config.created_at = now;
        }
        self.configs.insert(config.guild_id.clone(), config.clone());
        Ok(config)
    }

    async fn get(&self, guild_id: &str) -> Result<Option<GuildConfig>, StoreError> {
        Ok(self.configs.get(guild_id).map(|entry| entry.value().clone()))
    }

    async fn get_all(&self) -> Result<Vec<GuildConfig>, StoreError> {
        let mut configs: Vec<GuildConfig> = self
            .configs
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        configs.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.guild_id.cmp(&b.guild_id))
        });
        Ok(configs)
    }

    async fn delete(&self, guild_id: &str) -> Result<(), StoreError> {
        self.configs.remove(guild_id);
        Ok(())
    }
}

/// Test double whose every call fails as if Postgres were down
#[cfg(test)]
pub struct UnreachableStore;

#[cfg(test)]
#[async_trait]
impl ConfigStore for UnreachableStore {
    async fn upsert(&self, _config: GuildConfig) -> Result<GuildConfig, StoreError> {
        Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut))
    }
    async fn get(&self, _guild_id: &str) -> Result<Option<GuildConfig>, StoreError> {
        Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut))
    }
    async fn get_all(&self) -> Result<Vec<GuildConfig>, StoreError> {
        Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut))
    }
    async fn delete(&self, _guild_id: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_then_get_round_trips() {
        let store = InMemoryStore::new();
        let config = GuildConfig::new("1", "Guild", "42", "ID");

        let saved = store.upsert(config.clone()).await.unwrap();
        let loaded = store.get("1").await.unwrap().unwrap();

        assert_eq!(loaded, saved);
        assert_eq!(loaded.guild_name, config.guild_name);
        assert_eq!(loaded.reminder_channel_id, "42");
        assert_eq!(loaded.reminder_language, "ID");
    }

    #[tokio::test]
    async fn test_missing_guild_is_not_an_error() {
        let store = InMemoryStore::new();
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_keeps_created_at_and_guild_uniqueness() {
        let store = InMemoryStore::new();
        let first = store
            .upsert(GuildConfig::new("1", "Guild", "42", "ID"))
            .await
            .unwrap();
        let second = store
            .upsert(GuildConfig::new("1", "Guild", "43", ""))
            .await
            .unwrap();

        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].reminder_channel_id, "43");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryStore::new();
        store
            .upsert(GuildConfig::new("1", "Guild", "42", "EN"))
            .await
            .unwrap();

        store.delete("1").await.unwrap();
        store.delete("1").await.unwrap();
        assert!(store.get("1").await.unwrap().is_none());
    }
}
