use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

use super::rules::ReminderKey;

/// Reminders already fired during the current calendar day.
///
/// Owned by the tick loop alone. A change in day-of-year clears it before
/// any rule is evaluated.
#[derive(Debug, Default)]
pub struct FiredLedger {
    fired: HashSet<ReminderKey>,
    last_day_of_year: Option<u32>,
}

impl FiredLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the ledger if `today` is a different day than the last one seen.
    /// Returns true when a rollover happened.
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        let day = today.ordinal();
        if self.last_day_of_year == Some(day) {
            return false;
        }
        self.fired.clear();
        self.last_day_of_year = Some(day);
        true
    }

    /// Record `key` as fired. Returns false if it had already fired today.
    pub fn mark(&mut self, key: ReminderKey) -> bool {
        self.fired.insert(key)
    }

    pub fn contains(&self, key: &ReminderKey) -> bool {
        self.fired.contains(key)
    }
}
