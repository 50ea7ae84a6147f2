/// Discord-agnostic business logic behind the slash commands
mod reminder_service;

pub use reminder_service::{ReminderService, ServiceError, SetChannelRequest, StopOutcome};
