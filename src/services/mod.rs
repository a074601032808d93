//! Services module
//!
//! This module contains services that talk to the outside world

pub mod notification;

pub use notification::{DeliveryReport, NotificationService, NotificationStats};
