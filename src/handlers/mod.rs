//! Bot handlers module
//!
//! This module contains the Telegram bot handlers:
//! - Command descriptions for the bot menu
//! - Message handlers for text messages

pub mod commands;
pub mod messages;

pub use commands::Command;
pub use messages::handle_message;
