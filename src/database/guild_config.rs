use chrono::{DateTime, Utc};
use sqlx::Error as SqlxError;

use super::Database;

/// Persisted reminder settings for one guild.
///
/// An empty `reminder_channel_id` disables reminders; an empty
/// `reminder_language` means random rotation.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct GuildConfig {
    pub guild_id: String,
    pub guild_name: String,
    pub reminder_channel_id: String,
    pub reminder_language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GuildConfig {
    /// A fresh record stamped with the current time
    pub fn new(
        guild_id: impl Into<String>,
        guild_name: impl Into<String>,
        reminder_channel_id: impl Into<String>,
        reminder_language: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            guild_id: guild_id.into(),
            guild_name: guild_name.into(),
            reminder_channel_id: reminder_channel_id.into(),
            reminder_language: reminder_language.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn reminders_enabled(&self) -> bool {
        !self.reminder_channel_id.is_empty()
    }
}

impl Database {
    /// Insert or update a guild configuration, keeping the original `created_at`
    pub async fn upsert_guild_config(&self, config: &GuildConfig) -> Result<GuildConfig, SqlxError> {
        sqlx::query_as::<_, GuildConfig>(
            r#"
            INSERT INTO guild_configs
                (guild_id, guild_name, reminder_channel_id, reminder_language, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            ON CONFLICT (guild_id)
            DO UPDATE SET
                guild_name = $2,
                reminder_channel_id = $3,
                reminder_language = $4,
                updated_at = NOW()
            RETURNING guild_id, guild_name, reminder_channel_id, reminder_language, created_at, updated_at
            "#,
        )
        .bind(&config.guild_id)
        .bind(&config.guild_name)
        .bind(&config.reminder_channel_id)
        .bind(&config.reminder_language)
        .fetch_one(self.pool())
        .await
    }

    /// Get the configuration for a guild, if any
    pub async fn get_guild_config(&self, guild_id: &str) -> Result<Option<GuildConfig>, SqlxError> {
        sqlx::query_as::<_, GuildConfig>(
            r#"
            SELECT guild_id, guild_name, reminder_channel_id, reminder_language, created_at, updated_at
            FROM guild_configs
            WHERE guild_id = $1
            "#,
        )
        .bind(guild_id)
        .fetch_optional(self.pool())
        .await
    }

    /// Get every stored guild configuration
    pub async fn get_all_guild_configs(&self) -> Result<Vec<GuildConfig>, SqlxError> {
        sqlx::query_as::<_, GuildConfig>(
            r#"
            SELECT guild_id, guild_name, reminder_channel_id, reminder_language, created_at, updated_at
            FROM guild_configs
            ORDER BY created_at, guild_id
            "#,
        )
        .fetch_all(self.pool())
        .await
    }

    /// Remove a guild configuration (no-op if absent)
    pub async fn delete_guild_config(&self, guild_id: &str) -> Result<(), SqlxError> {
        sqlx::query("DELETE FROM guild_configs WHERE guild_id = $1")
            .bind(guild_id)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
