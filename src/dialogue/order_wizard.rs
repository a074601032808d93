//! Order wizard steps
//!
//! Marketplace → warehouse → date → address → distance → boxes → sender →
//! phone → confirmation. Every free-text answer is stored verbatim and the
//! wizard moves on; nothing is validated.

use chrono::Utc;
use tracing::{debug, warn};
use crate::models::order::generate_order_number;
use crate::models::{Order, OrderField, SubmittedOrder, MARKETPLACES};
use crate::state::{OrderStep, Session};
use crate::utils::errors::{FreightDeskError, Result};
use crate::utils::logging::log_order_submitted;
use super::{texts, DialogueEngine, IncomingText, Keyboard, Reply};

impl DialogueEngine {
    /// Start a fresh order, discarding any session the user had
    pub(crate) fn begin_order(&self, user_id: i64) -> Vec<Reply> {
        if let Some(previous) = self.sessions.get(user_id) {
            debug!(user_id = user_id, flow = previous.flow(), step = previous.step_name(),
                   "Discarding unfinished session");
        }
        self.sessions.set(user_id, Session::new_order());
        vec![self.marketplace_prompt(user_id)]
    }

    /// Marketplace button pressed.
    ///
    /// Accepted at any step of an order in progress; the wizard then resumes
    /// from the warehouse question.
    pub(crate) fn choose_marketplace(&self, user_id: i64, marketplace: &str) -> Result<Vec<Reply>> {
        match self.sessions.get(user_id) {
            Some(Session::Order { mut order, .. }) => {
                order.set(OrderField::Marketplace, marketplace);
                Ok(self.advance(user_id, order, OrderStep::AwaitWarehouse))
            }
            Some(other) => Err(FreightDeskError::InvalidStateTransition {
                from: format!("{}/{}", other.flow(), other.step_name()),
                to: OrderStep::AwaitWarehouse.as_str().to_string(),
            }),
            None => Err(FreightDeskError::SessionNotFound { user_id }),
        }
    }

    /// Free text received while an order is in progress
    pub(crate) fn continue_order(&self, user_id: i64, mut order: Order, step: OrderStep, text: &str) -> Vec<Reply> {
        match (step.field(), step.next()) {
            (Some(OrderField::Marketplace), _) => {
                debug!(user_id = user_id, text = text, "Expected a marketplace button, asking again");
                vec![self.marketplace_prompt(user_id)]
            }
            (Some(field), Some(next)) => {
                order.set(field, text);
                self.advance(user_id, order, next)
            }
            _ => {
                debug!(user_id = user_id, "Expected confirm or cancel, showing summary again");
                vec![self.confirmation_prompt(user_id, &order)]
            }
        }
    }

    /// Confirm button pressed: hand the order over to the operator
    pub(crate) fn confirm_order(&self, incoming: &IncomingText) -> Result<Vec<Reply>> {
        let user_id = incoming.user_id;

        let order = match self.sessions.get(user_id) {
            Some(Session::Order { order, step: OrderStep::Confirming }) => order,
            Some(other) => {
                return Err(FreightDeskError::InvalidStateTransition {
                    from: format!("{}/{}", other.flow(), other.step_name()),
                    to: "finished".to_string(),
                })
            }
            None => return Err(FreightDeskError::SessionNotFound { user_id }),
        };

        if !order.is_complete() {
            let missing: Vec<&str> = order.missing_fields().iter().map(OrderField::as_str).collect();
            warn!(user_id = user_id, missing = ?missing, "Refusing to submit incomplete order");
            return Err(FreightDeskError::InvalidInput(format!(
                "order is missing fields: {}",
                missing.join(", ")
            )));
        }

        self.sessions.delete(user_id);

        let submitted = SubmittedOrder {
            number: generate_order_number(),
            client: incoming.username.clone(),
            order,
            submitted_at: Utc::now(),
        };
        log_order_submitted(submitted.number, user_id, self.config.operator_chat_id);

        Ok(vec![
            Reply::text(user_id, texts::order_accepted(submitted.number)).remove_keyboard(),
            Reply::text(self.config.operator_chat_id, texts::operator_summary(&submitted)),
            self.main_menu(user_id),
        ])
    }

    /// Cancel button pressed: drop whatever the user was doing
    pub(crate) fn cancel_order(&self, user_id: i64) -> Vec<Reply> {
        if let Some(session) = self.sessions.delete(user_id) {
            debug!(user_id = user_id, flow = session.flow(), step = session.step_name(), "Session cancelled");
        }

        vec![
            Reply::text(user_id, texts::ORDER_CANCELLED).remove_keyboard(),
            self.main_menu(user_id),
        ]
    }

    fn advance(&self, user_id: i64, order: Order, next: OrderStep) -> Vec<Reply> {
        let reply = match next {
            OrderStep::Confirming => self.confirmation_prompt(user_id, &order),
            OrderStep::AwaitWarehouse => Reply::text(user_id, texts::prompt(next)).remove_keyboard(),
            _ => Reply::text(user_id, texts::prompt(next)),
        };
        self.sessions.set(user_id, Session::Order { order, step: next });
        vec![reply]
    }

    fn marketplace_prompt(&self, user_id: i64) -> Reply {
        Reply::text(user_id, texts::prompt(OrderStep::AwaitMarketplace))
            .with_keyboard(Keyboard::rows(vec![MARKETPLACES.to_vec()]))
    }

    fn confirmation_prompt(&self, user_id: i64, order: &Order) -> Reply {
        Reply::text(user_id, texts::confirmation(order))
            .with_keyboard(Keyboard::rows(vec![vec![texts::BTN_CONFIRM, texts::BTN_CANCEL]]))
    }
}
