use pokerduel_engine::protocol::{GameState, PokerAction};

use crate::Strategy;

/// Calls (or checks) everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingBot;

impl Strategy for CallingBot {
    fn get_action(&mut self, _state: &GameState) -> PokerAction {
        PokerAction::call()
    }

    fn name(&self) -> &str {
        "CallingBot"
    }
}
