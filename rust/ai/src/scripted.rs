use std::collections::VecDeque;

use pokerduel_engine::protocol::{GameState, PokerAction};

use crate::Strategy;

/// Replays a fixed list of actions, then calls forever.
#[derive(Debug, Clone)]
pub struct ScriptedBot {
    name: String,
    script: VecDeque<PokerAction>,
}

impl ScriptedBot {
    pub fn new(name: impl Into<String>, script: Vec<PokerAction>) -> Self {
        Self {
            name: name.into(),
            script: script.into(),
        }
    }
}

impl Strategy for ScriptedBot {
    fn get_action(&mut self, _state: &GameState) -> PokerAction {
        self.script.pop_front().unwrap_or_else(PokerAction::call)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
