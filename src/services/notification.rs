//! Notification service implementation
//!
//! Delivers the replies produced by the dialogue engine through the Bot API.
//! Replies are sent one by one in order; a failed send is logged and counted
//! and the remaining replies still go out.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use teloxide::{
    Bot,
    payloads::SendMessageSetters,
    prelude::Request,
    requests::Requester,
    types::{ChatId, KeyboardButton, KeyboardMarkup, KeyboardRemove, Message, ReplyMarkup},
};
use tracing::{debug, error, info};
use crate::dialogue::{Keyboard, Reply};
use crate::utils::errors::{FreightDeskError, Result};

/// Outcome of delivering one batch of replies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub sent: usize,
    pub failed: usize,
}

/// Notification statistics since startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationStats {
    pub total_sent: u64,
    pub total_failed: u64,
}

#[derive(Debug, Default)]
struct Counters {
    sent: AtomicU64,
    failed: AtomicU64,
}

/// Notification service for message delivery
#[derive(Clone)]
pub struct NotificationService {
    bot: Bot,
    counters: Arc<Counters>,
}

impl NotificationService {
    pub fn new(bot: Bot) -> Self {
        Self {
            bot,
            counters: Arc::new(Counters::default()),
        }
    }

    /// Send a single reply
    pub async fn send_reply(&self, reply: &Reply) -> Result<Message> {
        debug!(chat_id = reply.chat_id, "Sending message");

        let mut request = self.bot.send_message(ChatId(reply.chat_id), reply.text.clone());
        if let Some(markup) = reply_markup(&reply.keyboard) {
            request = request.reply_markup(markup);
        }

        match request.send().await {
            Ok(message) => {
                self.counters.sent.fetch_add(1, Ordering::Relaxed);
                Ok(message)
            }
            Err(e) => {
                self.counters.failed.fetch_add(1, Ordering::Relaxed);
                error!(chat_id = reply.chat_id, error = %e, "Failed to send message");
                Err(FreightDeskError::Telegram(e))
            }
        }
    }

    /// Send replies in order, carrying on past failures
    pub async fn deliver(&self, replies: &[Reply]) -> DeliveryReport {
        let mut report = DeliveryReport::default();

        for reply in replies {
            match self.send_reply(reply).await {
                Ok(_) => report.sent += 1,
                Err(_) => report.failed += 1,
            }
        }

        if report.failed > 0 {
            info!(sent = report.sent, failed = report.failed, "Delivery completed with failures");
        }
        report
    }

    pub fn get_stats(&self) -> NotificationStats {
        NotificationStats {
            total_sent: self.counters.sent.load(Ordering::Relaxed),
            total_failed: self.counters.failed.load(Ordering::Relaxed),
        }
    }
}

/// Telegram markup for a keyboard instruction; `None` leaves the keyboard alone
pub fn reply_markup(keyboard: &Keyboard) -> Option<ReplyMarkup> {
    match keyboard {
        Keyboard::Unchanged => None,
        Keyboard::Buttons(rows) => {
            let rows = rows
                .iter()
                .map(|row| row.iter().map(|caption| KeyboardButton::new(caption.clone())).collect::<Vec<_>>());
            Some(ReplyMarkup::Keyboard(KeyboardMarkup::new(rows).resize_keyboard()))
        }
        Keyboard::Remove => Some(ReplyMarkup::KeyboardRemove(KeyboardRemove::new())),
    }
}
