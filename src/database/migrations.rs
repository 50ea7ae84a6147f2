use super::Database;
use sqlx::Error as SqlxError;

const CREATE_GUILD_CONFIGS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS guild_configs (
        guild_id TEXT PRIMARY KEY,
        guild_name TEXT NOT NULL DEFAULT '',
        reminder_channel_id TEXT NOT NULL DEFAULT '',
        reminder_language TEXT NOT NULL DEFAULT '',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

impl Database {
    /// Run database migrations to create tables
    pub(super) async fn run_migrations(&self) -> Result<(), SqlxError> {
        self.create_guild_configs_table().await?;
        Ok(())
    }

    async fn create_guild_configs_table(&self) -> Result<(), SqlxError> {
        sqlx::query(CREATE_GUILD_CONFIGS_TABLE)
            .execute(self.pool())
            .await?;

        Ok(())
    }
}
