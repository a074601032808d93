//! Conversation session state
//!
//! A session is the per-user progress through either the order wizard or the
//! cost calculator. A user without a session is idle.

use crate::models::{Order, OrderField};

/// Step of the order wizard, named after the input it is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStep {
    AwaitMarketplace,
    AwaitWarehouse,
    AwaitDate,
    AwaitAddress,
    AwaitDistance,
    AwaitBoxes,
    AwaitSender,
    AwaitPhone,
    Confirming,
}

impl OrderStep {
    /// Order field captured at this step
    pub fn field(&self) -> Option<OrderField> {
        match self {
            OrderStep::AwaitMarketplace => Some(OrderField::Marketplace),
            OrderStep::AwaitWarehouse => Some(OrderField::Warehouse),
            OrderStep::AwaitDate => Some(OrderField::Date),
            OrderStep::AwaitAddress => Some(OrderField::Address),
            OrderStep::AwaitDistance => Some(OrderField::Distance),
            OrderStep::AwaitBoxes => Some(OrderField::Boxes),
            OrderStep::AwaitSender => Some(OrderField::Sender),
            OrderStep::AwaitPhone => Some(OrderField::Phone),
            OrderStep::Confirming => None,
        }
    }

    /// The step that follows this one
    pub fn next(&self) -> Option<OrderStep> {
        match self {
            OrderStep::AwaitMarketplace => Some(OrderStep::AwaitWarehouse),
            OrderStep::AwaitWarehouse => Some(OrderStep::AwaitDate),
            OrderStep::AwaitDate => Some(OrderStep::AwaitAddress),
            OrderStep::AwaitAddress => Some(OrderStep::AwaitDistance),
            OrderStep::AwaitDistance => Some(OrderStep::AwaitBoxes),
            OrderStep::AwaitBoxes => Some(OrderStep::AwaitSender),
            OrderStep::AwaitSender => Some(OrderStep::AwaitPhone),
            OrderStep::AwaitPhone => Some(OrderStep::Confirming),
            OrderStep::Confirming => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStep::AwaitMarketplace => "await_marketplace",
            OrderStep::AwaitWarehouse => "await_warehouse",
            OrderStep::AwaitDate => "await_date",
            OrderStep::AwaitAddress => "await_address",
            OrderStep::AwaitDistance => "await_distance",
            OrderStep::AwaitBoxes => "await_boxes",
            OrderStep::AwaitSender => "await_sender",
            OrderStep::AwaitPhone => "await_phone",
            OrderStep::Confirming => "confirming",
        }
    }
}

/// Step of the cost calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorStep {
    AwaitBoxCount,
    AwaitDimensions { box_count: u64 },
}

impl CalculatorStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorStep::AwaitBoxCount => "await_box_count",
            CalculatorStep::AwaitDimensions { .. } => "await_dimensions",
        }
    }
}

/// In-progress conversation of one user.
///
/// The wizard and the calculator share the same slot: starting one discards
/// the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Order { order: Order, step: OrderStep },
    Calculator { step: CalculatorStep },
}

impl Session {
    /// Fresh wizard session waiting for the marketplace choice
    pub fn new_order() -> Self {
        Session::Order {
            order: Order::new(),
            step: OrderStep::AwaitMarketplace,
        }
    }

    /// Fresh calculator session waiting for the box count
    pub fn new_calculator() -> Self {
        Session::Calculator {
            step: CalculatorStep::AwaitBoxCount,
        }
    }

    pub fn flow(&self) -> &'static str {
        match self {
            Session::Order { .. } => "order",
            Session::Calculator { .. } => "calculator",
        }
    }

    pub fn step_name(&self) -> &'static str {
        match self {
            Session::Order { step, .. } => step.as_str(),
            Session::Calculator { step } => step.as_str(),
        }
    }
}
