//! FreightDesk Telegram Bot
//!
//! A Telegram bot for a freight forwarding service. Customers fill in a
//! shipping order through a step-by-step wizard that is forwarded to an
//! operator chat, or get a quick volumetric cost estimate.

#![allow(non_snake_case)]

pub mod config;
pub mod dialogue;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{FreightDeskError, Result};

// Re-export main components for easy access
pub use dialogue::{DialogueEngine, IncomingText, Reply};
pub use services::NotificationService;
pub use state::SessionStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
