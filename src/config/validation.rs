//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{FreightDeskError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_support_config(&settings.support)?;
    validate_calculator_config(&settings.calculator)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.trim().is_empty() {
        return Err(FreightDeskError::Config(
            "Bot token is required (set TOKEN or FREIGHTDESK__BOT__TOKEN)".to_string()
        ));
    }

    if config.operator_chat_id == 0 {
        return Err(FreightDeskError::Config(
            "Operator chat ID must be configured".to_string()
        ));
    }

    Ok(())
}

/// Validate support configuration
fn validate_support_config(config: &super::SupportConfig) -> Result<()> {
    if config.phone.trim().is_empty() {
        return Err(FreightDeskError::Config(
            "Support phone is required".to_string()
        ));
    }

    Ok(())
}

/// Validate calculator configuration
fn validate_calculator_config(config: &super::CalculatorConfig) -> Result<()> {
    if config.unit_rate == 0 {
        return Err(FreightDeskError::Config(
            "Calculator unit rate must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(FreightDeskError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(FreightDeskError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
