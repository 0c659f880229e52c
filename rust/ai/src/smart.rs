//! Rule-based strategy built on the shared hand evaluator.
//!
//! Preflop (or whenever checking is free) it calls holding a card above ten and
//! min-raises otherwise. Facing a postflop bet it looks at the absolute value of
//! its two-card hand: flush or better shoves, a pair calls, anything else folds.

use pokerduel_engine::hand::evaluate;
use pokerduel_engine::protocol::{GameState, PokerAction};

use crate::Strategy;

const SHOVE_AT: u32 = 3000;
const CALL_ABOVE: u32 = 2000;

#[derive(Debug, Clone, Copy, Default)]
pub struct SmartBot;

impl Strategy for SmartBot {
    fn get_action(&mut self, state: &GameState) -> PokerAction {
        let community = match state.community_card {
            Some(card) if state.to_call > 0 => card,
            _ => {
                return if state.my_card.value() > 10 {
                    PokerAction::call()
                } else {
                    PokerAction::raise(i64::from(state.min_raise))
                };
            }
        };

        let strength = evaluate(state.my_card, community).absolute_value();
        if strength >= SHOVE_AT {
            PokerAction::raise(i64::from(state.my_stack))
        } else if strength > CALL_ABOVE {
            PokerAction::call()
        } else {
            PokerAction::fold()
        }
    }

    fn name(&self) -> &str {
        "SmartBot"
    }
}
