// Command modules
mod reminder;

// Re-export all commands
pub use reminder::reminder;
