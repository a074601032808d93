//! Cost calculator steps

use tracing::debug;
use crate::models::calculator::{parse_box_count, parse_dimensions};
use crate::models::CalculatorInput;
use crate::state::{CalculatorStep, Session};
use crate::utils::logging::log_quote;
use super::{texts, DialogueEngine, Reply};

impl DialogueEngine {
    /// Start the calculator, discarding any session the user had
    pub(crate) fn start_calculator(&self, user_id: i64) -> Vec<Reply> {
        self.sessions.set(user_id, Session::new_calculator());
        vec![Self::box_count_prompt(user_id)]
    }

    pub(crate) fn continue_calculator(&self, user_id: i64, step: CalculatorStep, text: &str) -> Vec<Reply> {
        match step {
            CalculatorStep::AwaitBoxCount => match parse_box_count(text) {
                Ok(box_count) => {
                    self.sessions.set(user_id, Session::Calculator {
                        step: CalculatorStep::AwaitDimensions { box_count },
                    });
                    vec![Reply::text(user_id, texts::CALC_DIMENSIONS_PROMPT)]
                }
                Err(e) => {
                    debug!(user_id = user_id, error = %e, "Rejected box count");
                    vec![
                        Reply::text(user_id, texts::CALC_NOT_A_NUMBER),
                        Self::box_count_prompt(user_id),
                    ]
                }
            },
            CalculatorStep::AwaitDimensions { box_count } => {
                let quote = parse_dimensions(text).and_then(|dimensions| {
                    CalculatorInput { box_count, dimensions }.quote(self.config.unit_rate)
                });

                match quote {
                    Ok(quote) => {
                        self.sessions.delete(user_id);
                        log_quote(user_id, quote.volume_cm3, quote.cost);
                        vec![Reply::text(user_id, texts::quote(&quote)), self.main_menu(user_id)]
                    }
                    Err(e) => {
                        debug!(user_id = user_id, error = %e, "Rejected box dimensions, restarting calculator");
                        self.sessions.set(user_id, Session::new_calculator());
                        vec![
                            Reply::text(user_id, texts::CALC_BAD_FORMAT),
                            Self::box_count_prompt(user_id),
                        ]
                    }
                }
            }
        }
    }

    fn box_count_prompt(user_id: i64) -> Reply {
        Reply::text(user_id, texts::CALC_BOX_COUNT_PROMPT).remove_keyboard()
    }
}
