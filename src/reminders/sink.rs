use poise::serenity_prelude::{self as serenity, ChannelId, CreateAllowedMentions, CreateMessage};
use std::sync::Arc;
use tracing::{info, warn};

use crate::constants::SEND_TIMEOUT;

/// Where rendered reminders are delivered.
///
/// Delivery is fire-and-forget: implementations must return quickly, bound
/// their own I/O and log failures instead of returning them.
pub trait MessageSink: Send + Sync {
    fn send(&self, channel_id: &str, text: String);
}

/// Posts reminders to Discord channels through the bot's HTTP client
pub struct DiscordSink {
    http: Arc<serenity::Http>,
}

impl DiscordSink {
    pub fn new(http: Arc<serenity::Http>) -> Self {
        Self { http }
    }
}

impl MessageSink for DiscordSink {
    fn send(&self, channel_id: &str, text: String) {
        let channel_id = match channel_id.parse::<u64>() {
            Ok(id) if id != 0 => ChannelId::new(id),
            _ => {
                warn!("Refusing to send reminder to invalid channel id '{}'", channel_id);
                return;
            }
        };

        let http = Arc::clone(&self.http);
        tokio::spawn(async move {
            let message = CreateMessage::new()
                .content(text)
                .allowed_mentions(CreateAllowedMentions::new().everyone(true));

            match tokio::time::timeout(SEND_TIMEOUT, channel_id.send_message(&http, message)).await {
                Ok(Ok(_)) => info!("Delivered reminder to channel {}", channel_id),
                Ok(Err(e)) => warn!("Failed to deliver reminder to channel {}: {}", channel_id, e),
                Err(_) => warn!(
                    "Timed out after {:?} delivering reminder to channel {}",
                    SEND_TIMEOUT, channel_id
                ),
            }
        });
    }
}

/// Test double that records every delivery
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSink {
    sent: std::sync::Mutex<Vec<(String, String)>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl MessageSink for RecordingSink {
    fn send(&self, channel_id: &str, text: String) {
        self.sent.lock().unwrap().push((channel_id.to_string(), text));
    }
}
