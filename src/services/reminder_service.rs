/// Reminder service - handles the admin operations behind `/reminder`
use chrono::NaiveDate;
use tracing::info;

use crate::constants::UPCOMING_HOLIDAY_LIMIT;
use crate::database::{ConfigStore, GuildConfig, StoreError};
use crate::models::Data;
use crate::reminders::overview::{ReminderOverview, build_overview};
use crate::reminders::{Language, Locale, ReminderScheduler};
use crate::utils::validation::{ValidationError, require_non_blank};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Input for `/reminder set-channel`; the channel has already been checked
/// to be a text channel of the guild
#[derive(Debug, Clone)]
pub struct SetChannelRequest {
    pub guild_id: String,
    pub guild_name: String,
    pub channel_id: String,
    /// `None` means random rotation
    pub language: Option<Language>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopOutcome {
    /// Whether the guild had a reminder channel before stopping
    pub was_enabled: bool,
}

/// Service for reminder configuration operations
pub struct ReminderService<'a> {
    store: &'a dyn ConfigStore,
    scheduler: &'a ReminderScheduler,
}

impl<'a> ReminderService<'a> {
    pub fn new(store: &'a dyn ConfigStore, scheduler: &'a ReminderScheduler) -> Self {
        Self { store, scheduler }
    }

    pub fn from_data(data: &'a Data) -> Self {
        Self::new(data.store.as_ref(), data.scheduler.as_ref())
    }

    /// Persist the channel, point the scheduler at it and post an introduction.
    /// Nothing changes if validation or the write fails.
    pub async fn set_channel(&self, request: SetChannelRequest) -> Result<GuildConfig, ServiceError> {
        let guild_id = require_non_blank(&request.guild_id, "server id")?;
        let channel_id = require_non_blank(&request.channel_id, "channel")?;
        let language = request.language.map(Language::code).unwrap_or("");

        let saved = self
            .store
            .upsert(GuildConfig::new(
                guild_id,
                request.guild_name.trim(),
                channel_id,
                language,
            ))
            .await?;

        self.scheduler.state().set_target(channel_id, language);
        self.scheduler
            .sink()
            .send(channel_id, build_introduction(ReminderScheduler::locale_for(language)));

        info!(
            "Reminder channel for guild {} set to {} (language '{}')",
            guild_id, channel_id, language
        );
        Ok(saved)
    }

    /// Clear the guild's channel and language. The scheduler goes silent if it
    /// was sending to this guild's channel.
    pub async fn stop(&self, guild_id: &str, guild_name: &str) -> Result<StopOutcome, ServiceError> {
        let guild_id = require_non_blank(guild_id, "server id")?;

        let existing = self.store.get(guild_id).await?;
        let previous_channel = existing
            .as_ref()
            .map(|c| c.reminder_channel_id.clone())
            .unwrap_or_default();
        let name = existing
            .as_ref()
            .map(|c| c.guild_name.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| guild_name.trim().to_string());

        self.store
            .upsert(GuildConfig::new(guild_id, name, "", ""))
            .await?;

        if self.scheduler.state().clear_if_channel(&previous_channel) {
            info!("Reminder delivery disabled for guild {}", guild_id);
        }

        Ok(StopOutcome {
            was_enabled: !previous_channel.is_empty(),
        })
    }

    /// Read-only summary for `today`
    pub fn view(&self, today: NaiveDate) -> ReminderOverview {
        build_overview(today, UPCOMING_HOLIDAY_LIMIT)
    }
}

/// Message posted to a channel right after it is configured
pub fn build_introduction(locale: &Locale) -> String {
    format!(
        "**{}**\n{}\n\n• {}\n• {}\n• {}",
        locale.title,
        locale.description,
        locale.holidays_header,
        locale.ramadan_header,
        locale.daily_header
    )
}
