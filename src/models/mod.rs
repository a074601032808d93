//! Data models module
//!
//! This module contains the order and calculator models used by the dialogue
//! engine.

pub mod calculator;
pub mod order;

// Re-export commonly used models
pub use calculator::{BoxDimensions, CalculatorInput, CalculatorInputError, Quote};
pub use order::{Order, OrderField, SubmittedOrder, MARKETPLACES};
