use std::sync::Arc;

use crate::database::ConfigStore;
use crate::reminders::ReminderScheduler;

/// Bot state shared across all handlers
#[derive(Clone)]
pub struct Data {
    /// Guild configuration storage
    pub store: Arc<dyn ConfigStore>,
    /// The reminder loop whose target admin commands update
    pub scheduler: Arc<ReminderScheduler>,
}

impl Data {
    pub fn new(store: Arc<dyn ConfigStore>, scheduler: Arc<ReminderScheduler>) -> Self {
        Self { store, scheduler }
    }

    /// Restore the scheduler's target from stored guild configurations.
    ///
    /// The first stored entry with a channel wins; later ones are ignored
    /// while a target is set. Storage failures are logged and leave the
    /// scheduler untouched. Returns the number of entries restored.
    pub async fn load_from_database(&self) -> usize {
        let configs = match self.store.get_all().await {
            Ok(configs) => configs,
            Err(e) => {
                tracing::error!("Failed to load guild configurations: {}", e);
                return 0;
            }
        };

        let mut restored = 0;
        for config in configs.iter().filter(|c| c.reminders_enabled()) {
            if self
                .scheduler
                .state()
                .restore_if_unset(&config.reminder_channel_id, &config.reminder_language)
            {
                restored += 1;
                tracing::info!(
                    "Restored reminder channel {} (language '{}') for guild {} ({})",
                    config.reminder_channel_id,
                    config.reminder_language,
                    config.guild_name,
                    config.guild_id
                );
            }
        }

        tracing::info!(
            "Loaded {} guild configuration(s), restored {} reminder target(s)",
            configs.len(),
            restored
        );
        restored
    }
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{GuildConfig, InMemoryStore, UnreachableStore};
    use crate::reminders::scheduler::ReminderTarget;
    use crate::reminders::sink::RecordingSink;

    fn fresh_data(store: Arc<dyn ConfigStore>) -> Data {
        let scheduler = Arc::new(ReminderScheduler::new(Arc::new(RecordingSink::default())));
        Data::new(store, scheduler)
    }

    #[tokio::test]
    async fn test_rehydration_restores_stored_target() {
        let store = Arc::new(InMemoryStore::new());
        store
            .upsert(GuildConfig::new("1", "Guild", "42", "JP"))
            .await
            .unwrap();

        let data = fresh_data(store);
        assert_eq!(data.load_from_database().await, 1);
        assert_eq!(
            data.scheduler.state().target(),
            ReminderTarget {
                channel_id: "42".into(),
                language: "JP".into()
            }
        );
    }

    #[tokio::test]
    async fn test_rehydration_skips_disabled_and_keeps_first() {
        let store = Arc::new(InMemoryStore::new());
        store
            .upsert(GuildConfig::new("1", "Stopped", "", ""))
            .await
            .unwrap();
        store
            .upsert(GuildConfig::new("2", "First", "42", "ID"))
            .await
            .unwrap();
        store
            .upsert(GuildConfig::new("3", "Second", "43", "KR"))
            .await
            .unwrap();

        let data = fresh_data(store);
        assert_eq!(data.load_from_database().await, 1);
        assert_eq!(data.scheduler.state().target().channel_id, "42");
    }

    #[tokio::test]
    async fn test_rehydration_does_not_override_existing_target() {
        let store = Arc::new(InMemoryStore::new());
        store
            .upsert(GuildConfig::new("1", "Guild", "42", "JP"))
            .await
            .unwrap();

        let data = fresh_data(store);
        data.scheduler.state().set_target("7", "EN");
        assert_eq!(data.load_from_database().await, 0);
        assert_eq!(data.scheduler.state().target().channel_id, "7");
    }

    #[tokio::test]
    async fn test_rehydration_survives_storage_failure() {
        let data = fresh_data(Arc::new(UnreachableStore));
        assert_eq!(data.load_from_database().await, 0);
        assert!(!data.scheduler.state().target().is_enabled());
    }
}
