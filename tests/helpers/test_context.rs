//! Test context for unified test setup
//!
//! Wires a dialogue engine and a notification service to the mock Telegram
//! server, so a test can push messages through the real handler and inspect
//! what the bot sent.

use std::sync::Once;
use FreightDesk::config::Settings;
use FreightDesk::dialogue::DialogueEngine;
use FreightDesk::handlers::handle_message;
use FreightDesk::middleware::LoggingMiddleware;
use FreightDesk::services::{DeliveryReport, NotificationService};

use super::telegram_mock::{test_bot_token, test_operator_chat_id, test_user_id, TelegramMockServer};
use super::test_data::create_text_message;

static INIT: Once = Once::new();

/// Initialize test logging once per test binary
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("FreightDesk=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Unified test context that manages all test components
pub struct TestContext {
    pub telegram_mock: TelegramMockServer,
    pub settings: Settings,
    pub engine: DialogueEngine,
    pub notifier: NotificationService,
    pub logging: LoggingMiddleware,
    pub user_id: i64,
    pub username: Option<String>,
}

impl TestContext {
    /// Create a new test context with default mocks mounted
    pub async fn new() -> Self {
        let ctx = Self::without_mocks().await;
        ctx.telegram_mock.setup_default_mocks().await;
        ctx
    }

    /// Create a test context whose mock server has nothing mounted yet
    pub async fn without_mocks() -> Self {
        init_test_env();

        let telegram_mock = TelegramMockServer::new().await;

        let mut settings = Settings::default();
        settings.bot.token = test_bot_token();
        settings.bot.operator_chat_id = test_operator_chat_id();

        let engine = DialogueEngine::from_settings(&settings);
        let notifier = NotificationService::new(telegram_mock.bot());

        Self {
            telegram_mock,
            settings,
            engine,
            notifier,
            logging: LoggingMiddleware::new(true, false),
            user_id: test_user_id(),
            username: Some("ivan_shipper".to_string()),
        }
    }

    /// Deliver a text message from the test user through the message handler
    pub async fn send(&self, text: &str) -> DeliveryReport {
        let msg = create_text_message(self.user_id, self.username.as_deref(), text);
        handle_message(msg, &self.engine, &self.notifier, &self.logging).await
    }

    /// Send several messages in order
    pub async fn send_all(&self, texts: &[&str]) {
        for text in texts {
            self.send(text).await;
        }
    }
}
