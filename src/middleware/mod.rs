//! Middleware module
//!
//! This module contains middleware for request processing

pub mod logging;

pub use logging::{LoggingMiddleware, PerformanceTracker};
