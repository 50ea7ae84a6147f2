use poise::serenity_prelude::{ChannelType, GuildChannel, GuildId};

/// Validation error types
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    NotInGuild,
    NotTextChannel { got: ChannelType },
    ChannelOutsideGuild,
    BlankArgument(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NotInGuild => write!(f, "This command must be used in a server"),
            ValidationError::NotTextChannel { got } => {
                write!(f, "Reminders need a text channel, got {:?}", got)
            }
            ValidationError::ChannelOutsideGuild => {
                write!(f, "That channel does not belong to this server")
            }
            ValidationError::BlankArgument(name) => write!(f, "The {} must not be empty", name),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check that `channel` is a text channel of `guild_id`
pub fn validate_reminder_channel(
    channel: &GuildChannel,
    guild_id: GuildId,
) -> Result<(), ValidationError> {
    check_reminder_channel(channel.kind, channel.guild_id, guild_id)
}

fn check_reminder_channel(
    kind: ChannelType,
    channel_guild: GuildId,
    guild_id: GuildId,
) -> Result<(), ValidationError> {
    if kind != ChannelType::Text {
        return Err(ValidationError::NotTextChannel { got: kind });
    }
    if channel_guild != guild_id {
        return Err(ValidationError::ChannelOutsideGuild);
    }
    Ok(())
}

/// Extract guild ID from context, returning error if not in a guild
pub fn require_guild(guild_id: Option<GuildId>) -> Result<GuildId, ValidationError> {
    guild_id.ok_or(ValidationError::NotInGuild)
}

/// Reject empty or whitespace-only arguments
pub fn require_non_blank<'a>(value: &'a str, name: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankArgument(name));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_guild() {
        assert!(require_guild(None).is_err());
        assert!(require_guild(Some(GuildId::new(123))).is_ok());
    }

    #[test]
    fn test_reminder_channel_must_be_text() {
        let guild = GuildId::new(1);
        assert_eq!(
            check_reminder_channel(ChannelType::Voice, guild, guild),
            Err(ValidationError::NotTextChannel {
                got: ChannelType::Voice
            })
        );
        assert!(check_reminder_channel(ChannelType::Text, guild, guild).is_ok());
    }

    #[test]
    fn test_reminder_channel_must_belong_to_guild() {
        assert_eq!(
            check_reminder_channel(ChannelType::Text, GuildId::new(2), GuildId::new(1)),
            Err(ValidationError::ChannelOutsideGuild)
        );
    }

    #[test]
    fn test_require_non_blank() {
        assert_eq!(require_non_blank("  42 ", "channel"), Ok("42"));
        assert_eq!(
            require_non_blank("   ", "channel"),
            Err(ValidationError::BlankArgument("channel"))
        );
    }
}
