use chrono::{Duration as ChronoDuration, NaiveDateTime, Timelike};
use rand::seq::IndexedRandom;
use std::sync::{Arc, RwLock};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tracing::{debug, info, warn};

use super::ledger::FiredLedger;
use super::locale::Locale;
use super::rules::{ReminderKey, due_reminders};
use super::sink::MessageSink;
use crate::constants::{ROTATION_LANGUAGES, TICK_OFFSET_SECS};
use crate::utils::datetime::anchor_now;

/// Channel and language reminders are currently sent with.
/// An empty channel disables delivery, an empty language rotates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderTarget {
    pub channel_id: String,
    pub language: String,
}

impl ReminderTarget {
    pub fn is_enabled(&self) -> bool {
        !self.channel_id.is_empty()
    }
}

/// Shared, lock-protected target; written by admin commands and rehydration,
/// read once per tick
#[derive(Debug, Default)]
pub struct SchedulerState {
    target: RwLock<ReminderTarget>,
}

impl SchedulerState {
    pub fn target(&self) -> ReminderTarget {
        self.target
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn set_target(&self, channel_id: &str, language: &str) {
        let mut target = self
            .target
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        target.channel_id = channel_id.to_string();
        target.language = language.to_string();
    }

    /// Install a target only if none is set yet. Returns true if installed.
    pub fn restore_if_unset(&self, channel_id: &str, language: &str) -> bool {
        let mut target = self
            .target
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if target.is_enabled() || channel_id.is_empty() {
            return false;
        }
        target.channel_id = channel_id.to_string();
        target.language = language.to_string();
        true
    }

    /// Disable delivery if the active channel is `channel_id`.
    /// Returns true if the target was cleared.
    pub fn clear_if_channel(&self, channel_id: &str) -> bool {
        let mut target = self
            .target
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if channel_id.is_empty() || target.channel_id != channel_id {
            return false;
        }
        *target = ReminderTarget::default();
        true
    }
}

/// Minute-cadence reminder loop for holidays, Ramadan and workdays
pub struct ReminderScheduler {
    state: SchedulerState,
    sink: Arc<dyn MessageSink>,
}

impl ReminderScheduler {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self {
            state: SchedulerState::default(),
            sink,
        }
    }

    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    pub fn sink(&self) -> &dyn MessageSink {
        self.sink.as_ref()
    }

    /// Locale for a configured language; an empty language picks one of the
    /// rotation languages at random
    pub fn locale_for(language: &str) -> &'static Locale {
        if language.is_empty() {
            let code = ROTATION_LANGUAGES
                .choose(&mut rand::rng())
                .copied()
                .unwrap_or("EN");
            return Locale::for_code(code);
        }
        Locale::for_code(language)
    }

    /// Evaluate every rule for the anchor-local minute `now`.
    ///
    /// Keys are marked in the ledger before the sink is called, so a reminder
    /// is delivered at most once per day. Returns the keys fired by this tick.
    pub fn tick(&self, now: NaiveDateTime, ledger: &mut FiredLedger) -> Vec<ReminderKey> {
        if ledger.roll_over(now.date()) {
            info!("New day {}, reminder ledger reset", now.date());
        }

        let target = self.state.target();
        let mut fired = Vec::new();

        for reminder in due_reminders(now) {
            let key = reminder.key();
            if ledger.contains(&key) {
                debug!("Reminder {} already fired today", key);
                continue;
            }
            ledger.mark(key.clone());

            if target.is_enabled() {
                let text = reminder.render(Self::locale_for(&target.language));
                self.sink.send(&target.channel_id, text);
                info!("Fired reminder {} to channel {}", key, target.channel_id);
            } else {
                info!("Reminder {} is due but no channel is configured", key);
            }
            fired.push(key);
        }

        fired
    }

    /// Run the tick loop on the runtime until the returned handle is stopped
    pub fn spawn(self: &Arc<Self>) -> SchedulerHandle {
        let (stop_tx, stop_rx) = watch::channel(false);
        let scheduler = Arc::clone(self);
        let task = tokio::spawn(async move { scheduler.run(stop_rx).await });
        SchedulerHandle { stop_tx, task }
    }

    async fn run(&self, mut stop_rx: watch::Receiver<bool>) {
        info!("Reminder scheduler started");

        let mut ledger = FiredLedger::new();

        loop {
            let wait = until_next_tick(anchor_now());
            tokio::select! {
                _ = sleep(wait) => {
                    self.tick(anchor_now(), &mut ledger);
                }
                changed = stop_rx.changed() => {
                    if changed.is_err() || *stop_rx.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Reminder scheduler stopped");
    }
}

/// Time from `now` until the next minute boundary plus a small offset, so
/// every wall-clock minute is observed exactly once however late a wakeup was
fn until_next_tick(now: NaiveDateTime) -> Duration {
    let minute_start = now
        - ChronoDuration::seconds(now.second() as i64)
        - ChronoDuration::nanoseconds(now.nanosecond() as i64);
    let next = minute_start
        + ChronoDuration::minutes(1)
        + ChronoDuration::seconds(TICK_OFFSET_SECS);
    (next - now).to_std().unwrap_or(Duration::from_secs(1))
}

/// Stops a spawned scheduler loop
pub struct SchedulerHandle {
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Signal the loop to stop and wait for its current iteration to finish
    pub async fn stop(self) {
        let _ = self.stop_tx.send(true);
        if let Err(e) = self.task.await {
            warn!("Reminder scheduler task ended abnormally: {}", e);
        }
    }
}
