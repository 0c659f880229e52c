use pokerduel_engine::protocol::{GameState, PokerAction};

use crate::Strategy;

/// Pushes its whole stack every time it is asked.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllInBot;

impl Strategy for AllInBot {
    fn get_action(&mut self, state: &GameState) -> PokerAction {
        PokerAction::raise(i64::from(state.my_stack))
    }

    fn name(&self) -> &str {
        "All In Bot"
    }
}
