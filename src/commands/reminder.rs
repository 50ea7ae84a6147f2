use chrono::Datelike;
use poise::serenity_prelude::{Colour, CreateEmbed, CreateEmbedFooter, GuildChannel};
use tracing::{error, info};

use crate::{
    database::ConfigStore,
    models::{Context, Error},
    reminders::{Language, Locale, overview::overview_fields},
    services::{ReminderService, ServiceError, SetChannelRequest},
    utils::datetime::{anchor_now, format_date_display},
    utils::messages::{
        build_channel_set_message, build_storage_error, format_error, format_info, format_success,
    },
    utils::validation::{require_guild, validate_reminder_channel},
};

/// Holiday, Ramadan and workday reminders
#[poise::command(
    slash_command,
    guild_only,
    subcommands("set_channel", "stop", "view"),
    subcommand_required
)]
pub async fn reminder(_ctx: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Send reminders to a channel in this server
#[poise::command(
    slash_command,
    rename = "set-channel",
    required_permissions = "MANAGE_GUILD",
    ephemeral
)]
pub async fn set_channel(
    ctx: Context<'_>,
    #[description = "Text channel that will receive reminders"]
    #[channel_types("Text")]
    channel: GuildChannel,
    #[description = "Reminder language (leave empty to rotate between ID/JP/KR)"]
    language: Option<Language>,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    if let Err(e) = validate_reminder_channel(&channel, guild_id) {
        ctx.say(format_error(&e.to_string())).await?;
        return Ok(());
    }

    let guild_name = ctx
        .guild()
        .map(|g| g.name.clone())
        .unwrap_or_default();

    let request = SetChannelRequest {
        guild_id: guild_id.to_string(),
        guild_name,
        channel_id: channel.id.to_string(),
        language,
    };

    match ReminderService::from_data(ctx.data()).set_channel(request).await {
        Ok(saved) => {
            ctx.say(build_channel_set_message(
                &saved.reminder_channel_id,
                &saved.reminder_language,
            ))
            .await?;
            info!(
                "Configured reminders for guild {} in channel {}",
                guild_id, channel.id
            );
        }
        Err(ServiceError::Validation(e)) => {
            ctx.say(format_error(&e.to_string())).await?;
        }
        Err(ServiceError::Store(e)) => {
            error!("Failed to save reminder channel for guild {}: {}", guild_id, e);
            ctx.say(build_storage_error()).await?;
        }
    }

    Ok(())
}

/// Stop sending reminders in this server
#[poise::command(slash_command, required_permissions = "MANAGE_GUILD", ephemeral)]
pub async fn stop(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;
    let guild_name = ctx
        .guild()
        .map(|g| g.name.clone())
        .unwrap_or_default();

    match ReminderService::from_data(ctx.data())
        .stop(&guild_id.to_string(), &guild_name)
        .await
    {
        Ok(outcome) if outcome.was_enabled => {
            ctx.say(format_success("Reminders stopped for this server."))
                .await?;
            info!("Stopped reminders for guild {}", guild_id);
        }
        Ok(_) => {
            ctx.say(format_info("Reminders were not configured for this server."))
                .await?;
        }
        Err(ServiceError::Validation(e)) => {
            ctx.say(format_error(&e.to_string())).await?;
        }
        Err(ServiceError::Store(e)) => {
            error!("Failed to stop reminders for guild {}: {}", guild_id, e);
            ctx.say(build_storage_error()).await?;
        }
    }

    Ok(())
}

/// Show upcoming holidays and today's reminder plan
#[poise::command(slash_command)]
pub async fn view(
    ctx: Context<'_>,
    #[description = "Language to show the overview in"] language: Option<Language>,
) -> Result<(), Error> {
    // Without an explicit choice, use the guild's configured language
    let locale = match (language, ctx.guild_id()) {
        (Some(lang), _) => Locale::get(lang),
        (None, Some(guild_id)) => match ctx.data().store.get(&guild_id.to_string()).await {
            Ok(Some(config)) => Locale::for_code(&config.reminder_language),
            Ok(None) => Locale::get(Language::En),
            Err(e) => {
                error!("Failed to load reminder language for guild {}: {}", guild_id, e);
                Locale::get(Language::En)
            }
        },
        (None, None) => Locale::get(Language::En),
    };
    let overview = ReminderService::from_data(ctx.data()).view(anchor_now().date());

    let embed = overview_fields(&overview, locale).into_iter().fold(
        CreateEmbed::new()
            .title(locale.title)
            .description(locale.description)
            .colour(Colour::BLURPLE),
        |embed, (name, value)| embed.field(name, value, false),
    );
    let embed = embed.footer(CreateEmbedFooter::new(format!(
        "{} {} (WIB)",
        format_date_display(overview.today.month() as i32, overview.today.day() as i32),
        overview.today.year()
    )));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
