//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the FreightDesk application.

use tracing::{info, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::{LogFormat, LoggingConfig};
use crate::utils::errors::{FreightDeskError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file appender on drop and must be kept
/// alive for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| FreightDeskError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "freightdesk.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_ansi(false).with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let json = config.format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(filter)
        .with((!json).then(|| fmt::layer().with_writer(std::io::stdout)))
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stdout)))
        .with(file_layer)
        .try_init()
        .map_err(|e| FreightDeskError::Config(format!("Failed to install tracing subscriber: {}", e)))?;

    info!(level = %config.level, format = ?config.format, "Logging initialized");
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log a confirmed order handed over to the operator
pub fn log_order_submitted(order_number: u16, user_id: i64, operator_chat_id: i64) {
    info!(
        order_number = order_number,
        user_id = user_id,
        operator_chat_id = operator_chat_id,
        "Order submitted"
    );
}

/// Log a computed shipping quote
pub fn log_quote(user_id: i64, volume_cm3: u64, cost: u64) {
    debug!(
        user_id = user_id,
        volume_cm3 = volume_cm3,
        cost = cost,
        "Shipping quote computed"
    );
}
