//! Logging middleware
//!
//! This module provides logging middleware for tracking bot interactions
//! and the time it takes to answer them.

use std::time::{Duration, Instant};
use teloxide::types::Message;
use tracing::{debug, instrument, warn, Span};

/// Answers slower than this are reported as slow
const SLOW_OPERATION: Duration = Duration::from_millis(1000);

/// Logging middleware for bot interactions
#[derive(Debug, Clone)]
pub struct LoggingMiddleware {
    log_user_interactions: bool,
    log_performance: bool,
}

impl LoggingMiddleware {
    pub fn new(log_user_interactions: bool, log_performance: bool) -> Self {
        Self {
            log_user_interactions,
            log_performance,
        }
    }

    /// Log an incoming message before it is routed
    #[instrument(skip(self, message))]
    pub fn log_message(&self, message: &Message) {
        if !self.log_user_interactions {
            return;
        }

        let chat_type = if message.chat.is_private() {
            "private"
        } else if message.chat.is_channel() {
            "channel"
        } else {
            "group"
        };
        let user_id = message.from.as_ref().map(|user| user.id.0);
        let username = message.from.as_ref().and_then(|user| user.username.as_deref());

        match message.text() {
            Some(text) => debug!(
                chat_id = message.chat.id.0,
                user_id = user_id,
                username = username,
                chat_type = chat_type,
                text_len = text.chars().count(),
                "Text message received"
            ),
            None => debug!(
                chat_id = message.chat.id.0,
                user_id = user_id,
                chat_type = chat_type,
                "Non-text message received"
            ),
        }
    }

    /// Start timing an operation; `None` when performance logging is off
    pub fn create_performance_span(&self, operation: &str) -> Option<PerformanceTracker> {
        self.log_performance
            .then(|| PerformanceTracker::new(operation.to_string()))
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// Performance tracker for measuring operation duration
pub struct PerformanceTracker {
    operation: String,
    start_time: Instant,
    _span: Span,
}

impl PerformanceTracker {
    fn new(operation: String) -> Self {
        let span = tracing::info_span!("performance", operation = %operation);

        Self {
            operation,
            start_time: Instant::now(),
            _span: span,
        }
    }

    /// Complete the performance tracking and log the result
    pub fn complete(self, success: bool) {
        let duration = self.start_time.elapsed();
        let duration_ms = duration.as_millis();

        if success {
            debug!(operation = %self.operation, duration_ms = duration_ms, "Operation completed successfully");
        } else {
            warn!(operation = %self.operation, duration_ms = duration_ms, "Operation failed");
        }

        if duration > SLOW_OPERATION {
            warn!(operation = %self.operation, duration_ms = duration_ms, "Slow operation detected");
        }
    }
}
