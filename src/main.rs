mod commands;
mod constants;
mod database;
mod models;
mod reminders;
mod services;
mod utils;

use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    commands::reminder,
    constants::LOG_DIRECTIVE,
    database::{ConfigStore, Database, InMemoryStore},
    models::Data,
    reminders::{DiscordSink, ReminderScheduler},
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    initialize_logging();

    // Load configuration from environment
    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to the configuration store
    let store: Arc<dyn ConfigStore> = match &config.database_url {
        Some(url) => match Database::new(url).await {
            Ok(db) => Arc::new(db),
            Err(e) => {
                error!("Failed to connect to database: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            warn!("DATABASE_URL not set, reminder configuration will not survive restarts");
            Arc::new(InMemoryStore::new())
        }
    };

    // The scheduler delivers through its own HTTP client so it can start
    // before the gateway connection is up
    let http = Arc::new(serenity::Http::new(&config.discord_token));
    let scheduler = Arc::new(ReminderScheduler::new(Arc::new(DiscordSink::new(http))));

    // Initialize bot data and restore reminder targets
    let data = Data::new(store, Arc::clone(&scheduler));
    data.load_from_database().await;

    let scheduler_handle = scheduler.spawn();
    info!("Reminder scheduler task started");

    // Create and start the bot
    let result = start_bot(config.discord_token, data, config.dev_guild_id).await;

    scheduler_handle.stop().await;

    if let Err(e) = result {
        error!("Bot error: {}", e);
        std::process::exit(1);
    }
}

/// Configuration loaded from environment variables
struct Config {
    discord_token: String,
    database_url: Option<String>,
    dev_guild_id: Option<u64>,
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Load configuration from environment variables
fn load_configuration() -> Result<Config, Box<dyn std::error::Error>> {
    let discord_token = std::env::var("DISCORD_TOKEN")
        .map_err(|_| "DISCORD_TOKEN environment variable not set. Set it with: export DISCORD_TOKEN=your_bot_token")?;

    // Optional: without it, configuration lives in memory only
    let database_url = std::env::var("DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty());

    // Optional: development guild ID for faster command registration
    let dev_guild_id = std::env::var("DEV_GUILD_ID")
        .ok()
        .and_then(|id| id.parse::<u64>().ok());

    if dev_guild_id.is_some() {
        info!("Development mode: Commands will be registered to guild only");
    }

    Ok(Config {
        discord_token,
        database_url,
        dev_guild_id,
    })
}

/// Create and start the Discord bot
async fn start_bot(
    token: String,
    data: Data,
    dev_guild_id: Option<u64>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![reminder()],
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                // Register commands based on dev_guild_id
                if let Some(guild_id) = dev_guild_id {
                    let guild = serenity::GuildId::new(guild_id);
                    info!("Registering commands in development guild: {}", guild_id);
                    poise::builtins::register_in_guild(ctx, &framework.options().commands, guild)
                        .await?;
                    info!(
                        "Commands registered in guild {} (instant updates)",
                        guild_id
                    );
                } else {
                    info!("Registering commands globally (may take up to 1 hour)");
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    info!("Commands registered globally");
                }

                info!("Bot is ready!");
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    // Start the bot
    info!("Starting bot...");
    client.start().await?;

    Ok(())
}
