//! FreightDesk Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

use FreightDesk::{
    config::Settings,
    dialogue::DialogueEngine,
    handlers::{handle_message, Command},
    middleware::LoggingMiddleware,
    services::NotificationService,
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;
    settings.validate().context("Invalid configuration")?;

    // Initialize logging; the guard flushes file logs on shutdown
    let _guard = logging::init_logging(&settings.logging)?;

    info!(version = FreightDesk::VERSION, "Starting FreightDesk Telegram Bot...");
    info!(
        operator_chat_id = settings.bot.operator_chat_id,
        unit_rate = settings.calculator.unit_rate,
        "Configuration loaded"
    );

    let bot = Bot::new(&settings.bot.token);

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let engine = Arc::new(DialogueEngine::from_settings(&settings));
    let notifier = Arc::new(NotificationService::new(bot.clone()));
    let logging_middleware = Arc::new(LoggingMiddleware::default());

    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![engine, notifier.clone(), logging_middleware])
        .default_handler(|upd| async move {
            tracing::debug!(update_id = ?upd.id, "Unhandled update");
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");
    dispatcher.dispatch().await;

    let stats = notifier.get_stats();
    info!(
        total_sent = stats.total_sent,
        total_failed = stats.total_failed,
        "FreightDesk bot has been shut down."
    );

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;

    Update::filter_message()
        .chain(dptree::inspect(|msg: Message, logging: Arc<LoggingMiddleware>| {
            logging.log_message(&msg);
        }))
        .chain(dptree::filter(|msg: Message| msg.text().is_some()))
        .endpoint(handle_messages)
}

/// Handle text messages
async fn handle_messages(
    msg: Message,
    engine: Arc<DialogueEngine>,
    notifier: Arc<NotificationService>,
    logging: Arc<LoggingMiddleware>,
) -> HandlerResult {
    handle_message(msg, &engine, &notifier, &logging).await;
    Ok(())
}
