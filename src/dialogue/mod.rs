//! Dialogue engine
//!
//! Turns one inbound text message into the list of replies the bot should
//! send. Routing happens in a single place: an exact command or button
//! caption wins, otherwise the text continues the user's current session,
//! otherwise it is echoed back. The engine never talks to Telegram itself,
//! see [`crate::services::NotificationService`] for delivery.

pub mod calculator;
pub mod order_wizard;
pub mod reply;
pub mod router;
pub mod texts;

pub use reply::{IncomingText, Keyboard, Reply};
pub use router::Action;

use tracing::debug;
use crate::config::Settings;
use crate::state::{Session, SessionStore};
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;

/// Settings the dialogue needs at runtime
#[derive(Debug, Clone)]
pub struct DialogueConfig {
    pub operator_chat_id: i64,
    pub unit_rate: u64,
    pub support_phone: String,
}

impl From<&Settings> for DialogueConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            operator_chat_id: settings.bot.operator_chat_id,
            unit_rate: settings.calculator.unit_rate,
            support_phone: settings.support.phone.clone(),
        }
    }
}

/// Order wizard and cost calculator state machine
#[derive(Debug, Clone)]
pub struct DialogueEngine {
    sessions: SessionStore,
    config: DialogueConfig,
}

impl DialogueEngine {
    pub fn new(sessions: SessionStore, config: DialogueConfig) -> Self {
        Self { sessions, config }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(SessionStore::new(), DialogueConfig::from(settings))
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn config(&self) -> &DialogueConfig {
        &self.config
    }

    /// Process one text message.
    ///
    /// An error means the message was dropped; the session is left as it was
    /// and nothing should be sent to the user.
    pub fn handle(&self, incoming: &IncomingText) -> Result<Vec<Reply>> {
        let user_id = incoming.user_id;

        if let Some(action) = Action::parse(&incoming.text) {
            let details = match action {
                Action::Marketplace(marketplace) => Some(marketplace),
                _ => None,
            };
            log_user_action(user_id, action.as_str(), details);
            return match action {
                Action::Start => Ok(vec![self.main_menu(user_id)]),
                Action::NewOrder => Ok(vec![self.order_info(user_id)]),
                Action::Help => Ok(vec![self.help(user_id)]),
                Action::Calculator => Ok(self.start_calculator(user_id)),
                Action::BeginOrder => Ok(self.begin_order(user_id)),
                Action::Marketplace(marketplace) => self.choose_marketplace(user_id, marketplace),
                Action::Confirm => self.confirm_order(incoming),
                Action::Cancel => Ok(self.cancel_order(user_id)),
            };
        }

        match self.sessions.get(user_id) {
            Some(Session::Order { order, step }) => Ok(self.continue_order(user_id, order, step, &incoming.text)),
            Some(Session::Calculator { step }) => Ok(self.continue_calculator(user_id, step, &incoming.text)),
            None => {
                debug!(user_id = user_id, "No session, echoing message");
                Ok(vec![Reply::text(user_id, incoming.text.clone())])
            }
        }
    }

    /// Welcome text with the main menu keyboard
    pub(crate) fn main_menu(&self, user_id: i64) -> Reply {
        Reply::text(user_id, texts::WELCOME).with_keyboard(Keyboard::rows(vec![
            vec![texts::BTN_NEW_ORDER, texts::BTN_HELP],
            vec![texts::BTN_CALCULATOR],
        ]))
    }

    fn order_info(&self, user_id: i64) -> Reply {
        Reply::text(user_id, texts::ORDER_INFO)
            .with_keyboard(Keyboard::rows(vec![vec![texts::BTN_BEGIN_ORDER]]))
    }

    fn help(&self, user_id: i64) -> Reply {
        Reply::text(user_id, texts::help(&self.config.support_phone))
    }
}
