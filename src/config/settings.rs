//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::utils::errors::Result;

/// Operator chat that receives finished orders unless configured otherwise
pub const DEFAULT_OPERATOR_CHAT_ID: i64 = 1493522735;

/// Price of one cubic centimetre in roubles
pub const DEFAULT_UNIT_RATE: u64 = 100;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub support: SupportConfig,
    pub calculator: CalculatorConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    pub operator_chat_id: i64,
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .field("operator_chat_id", &self.operator_chat_id)
            .finish()
    }
}

/// Customer support contacts shown by the help command
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SupportConfig {
    pub phone: String,
}

/// Shipping cost calculator configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CalculatorConfig {
    pub unit_rate: u64,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    /// Directory for daily rolling log files; stdout only when unset
    pub directory: Option<String>,
}

impl Settings {
    /// Load settings from defaults, an optional `config` file and environment variables
    pub fn new() -> Result<Self> {
        let builder = Self::defaults()?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("FREIGHTDESK")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("bot.token", std::env::var("TOKEN").ok())?;

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load settings from a specific file on top of the defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::defaults()?
            .add_source(config::File::from(path.as_ref()))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }

    fn defaults() -> std::result::Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        let defaults = Settings::default();

        config::Config::builder()
            .set_default("bot.token", defaults.bot.token)?
            .set_default("bot.operator_chat_id", defaults.bot.operator_chat_id)?
            .set_default("support.phone", defaults.support.phone)?
            .set_default("calculator.unit_rate", defaults.calculator.unit_rate)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", "pretty")
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                operator_chat_id: DEFAULT_OPERATOR_CHAT_ID,
            },
            support: SupportConfig {
                phone: "+7 900 123-45-67".to_string(),
            },
            calculator: CalculatorConfig {
                unit_rate: DEFAULT_UNIT_RATE,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
                directory: None,
            },
        }
    }
}
