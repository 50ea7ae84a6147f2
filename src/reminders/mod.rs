/// Reminder scheduling: static calendars, rule evaluation and the tick loop
pub mod calendar;
pub mod ledger;
pub mod locale;
pub mod overview;
pub mod rules;
pub mod scheduler;
pub mod sink;

// Re-export public types and functions
pub use locale::{Language, Locale};
pub use scheduler::ReminderScheduler;
pub use sink::DiscordSink;
