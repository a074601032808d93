//! Command handlers module
//!
//! Commands are routed by the dialogue engine together with the button
//! captions; this enum only describes them for the Telegram command menu.

use teloxide::utils::command::BotCommands;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "FreightDesk commands:")]
pub enum Command {
    #[command(description = "Show the main menu")]
    Start,
    #[command(description = "Create a new shipping order")]
    New,
    #[command(description = "Show support contacts")]
    Help,
    #[command(description = "Estimate shipping cost")]
    Calc,
}
