//! Error handling for FreightDesk
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for FreightDesk application
#[derive(Error, Debug)]
pub enum FreightDeskError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No active session for user {user_id}")]
    SessionNotFound { user_id: i64 },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for FreightDesk operations
pub type Result<T> = std::result::Result<T, FreightDeskError>;

impl FreightDeskError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            FreightDeskError::Telegram(_) => true,
            FreightDeskError::ConfigLoad(_) => false,
            FreightDeskError::Config(_) => false,
            FreightDeskError::SessionNotFound { .. } => true,
            FreightDeskError::InvalidStateTransition { .. } => true,
            FreightDeskError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FreightDeskError::ConfigLoad(_) => ErrorSeverity::Critical,
            FreightDeskError::Config(_) => ErrorSeverity::Critical,
            FreightDeskError::SessionNotFound { .. } => ErrorSeverity::Warning,
            FreightDeskError::InvalidStateTransition { .. } => ErrorSeverity::Warning,
            FreightDeskError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
