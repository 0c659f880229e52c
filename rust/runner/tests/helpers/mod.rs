#![allow(dead_code)]

use std::time::Duration;

use pokerduel_engine::bot::PokerBot;
use pokerduel_engine::errors::{BotError, BotFault};
use pokerduel_engine::protocol::{GameState, PokerAction};
use pokerduel_runner::channel::{Launcher, Timeouts};

/// In-process bot with a fixed reply that can be told to fault.
pub struct TestBot {
    pub name: String,
    pub reply: PokerAction,
    /// Fault on this reset (1-based), if set.
    pub fail_on_reset: Option<u32>,
    /// Fault on this query (1-based), if set.
    pub fail_on_query: Option<u32>,
    pub resets: u32,
    pub queries: u32,
}

impl TestBot {
    pub fn new(name: &str, reply: PokerAction) -> Self {
        Self {
            name: name.to_string(),
            reply,
            fail_on_reset: None,
            fail_on_query: None,
            resets: 0,
            queries: 0,
        }
    }

    pub fn caller(name: &str) -> Self {
        Self::new(name, PokerAction::call())
    }

    pub fn folder(name: &str) -> Self {
        Self::new(name, PokerAction::fold())
    }

    pub fn boxed(self) -> Box<dyn PokerBot> {
        Box::new(self)
    }

    fn timeout(&self) -> BotError {
        BotError::new(
            self.name.clone(),
            BotFault::Timeout {
                after: Duration::from_millis(1000),
            },
        )
    }
}

impl PokerBot for TestBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_action(&mut self, _state: &GameState) -> Result<PokerAction, BotError> {
        self.queries += 1;
        if self.fail_on_query == Some(self.queries) {
            return Err(self.timeout());
        }
        Ok(self.reply.clone())
    }

    fn reset(&mut self) -> Result<(), BotError> {
        self.resets += 1;
        if self.fail_on_reset == Some(self.resets) {
            return Err(self.timeout());
        }
        Ok(())
    }
}

/// A `sh -c` bot: answers the handshake with `name`, acknowledges resets, and
/// runs `on_query` for every other line.
pub fn shell_bot(name: &str, on_query: &str) -> Launcher {
    let script = format!(
        r#"while IFS= read -r line; do
  case "$line" in
    __name__) echo "{name}" ;;
    __reset__) echo OK ;;
    *) {on_query} ;;
  esac
done"#
    );
    Launcher::Local {
        program: "sh".into(),
        args: vec!["-c".to_string(), script],
    }
}

pub fn sh(script: &str) -> Launcher {
    Launcher::Local {
        program: "sh".into(),
        args: vec!["-c".to_string(), script.to_string()],
    }
}

pub const CALL_REPLY: &str = r#"echo '{"ActionType":"Call"}'"#;

pub fn quick_timeouts() -> Timeouts {
    Timeouts {
        handshake: Duration::from_millis(2000),
        action: Duration::from_millis(300),
    }
}
