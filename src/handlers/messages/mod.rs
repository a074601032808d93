//! Message handlers module
//!
//! Handles incoming text messages: every command, button press and free-text
//! answer goes through the dialogue engine and the replies are delivered in
//! order.

use teloxide::types::Message;
use tracing::{debug, warn};
use crate::dialogue::{DialogueEngine, IncomingText};
use crate::middleware::LoggingMiddleware;
use crate::services::{DeliveryReport, NotificationService};

/// Build the engine input from a Telegram message; `None` for non-text messages
pub fn incoming_text(msg: &Message) -> Option<IncomingText> {
    let text = msg.text()?;
    let mut incoming = IncomingText::new(msg.chat.id.0, text);
    incoming.username = msg.from.as_ref().and_then(|user| user.username.clone());
    Some(incoming)
}

/// Handle incoming text messages.
///
/// Engine errors drop the message after logging; nothing is sent back.
pub async fn handle_message(
    msg: Message,
    engine: &DialogueEngine,
    notifier: &NotificationService,
    logging: &LoggingMiddleware,
) -> DeliveryReport {
    let Some(incoming) = incoming_text(&msg) else {
        debug!(chat_id = msg.chat.id.0, "Ignoring message without text");
        return DeliveryReport::default();
    };

    let tracker = logging.create_performance_span("handle_message");

    let replies = match engine.handle(&incoming) {
        Ok(replies) => replies,
        Err(e) => {
            warn!(
                user_id = incoming.user_id,
                error = %e,
                severity = %e.severity(),
                "Message dropped"
            );
            if let Some(tracker) = tracker {
                tracker.complete(false);
            }
            return DeliveryReport::default();
        }
    };

    let report = notifier.deliver(&replies).await;

    if let Some(tracker) = tracker {
        tracker.complete(report.failed == 0);
    }
    report
}
