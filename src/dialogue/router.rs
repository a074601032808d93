//! Fixed vocabulary of commands and button captions

use crate::models::MARKETPLACES;
use super::texts;

/// Action selected by an exact command or button caption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    NewOrder,
    Help,
    Calculator,
    BeginOrder,
    Marketplace(&'static str),
    Confirm,
    Cancel,
}

impl Action {
    /// Match `text` exactly against the vocabulary; anything else is free text
    pub fn parse(text: &str) -> Option<Action> {
        let action = match text {
            "/start" => Action::Start,
            "/new" | texts::BTN_NEW_ORDER => Action::NewOrder,
            "/help" | texts::BTN_HELP => Action::Help,
            "/calc" | texts::BTN_CALCULATOR => Action::Calculator,
            texts::BTN_BEGIN_ORDER => Action::BeginOrder,
            texts::BTN_CONFIRM => Action::Confirm,
            texts::BTN_CANCEL => Action::Cancel,
            other => {
                let marketplace = MARKETPLACES.iter().find(|name| **name == other)?;
                Action::Marketplace(*marketplace)
            }
        };
        Some(action)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::NewOrder => "new_order",
            Action::Help => "help",
            Action::Calculator => "calculator",
            Action::BeginOrder => "begin_order",
            Action::Marketplace(_) => "marketplace",
            Action::Confirm => "confirm",
            Action::Cancel => "cancel",
        }
    }
}
