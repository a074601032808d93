//! State management module
//!
//! This module handles per-user conversation state

pub mod session;
pub mod storage;

// Re-export commonly used state components
pub use session::{CalculatorStep, OrderStep, Session};
pub use storage::SessionStore;
