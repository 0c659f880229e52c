//! # pokerduel-ai: in-process sample bots
//!
//! Simple strategies that play through the same [`PokerBot`] trait as external
//! process bots, plus a registry that builds them by name.
//!
//! ## Core Components
//!
//! - [`Strategy`] - A decision policy: game state in, action out
//! - [`InProcessBot`] - Adapts a strategy to [`PokerBot`]; reset rebuilds it from scratch
//! - [`create_bot`] - Registry lookup by name
//!
//! ## Quick Start
//!
//! ```rust
//! use pokerduel_ai::create_bot;
//! use pokerduel_engine::bot::PokerBot;
//! use pokerduel_engine::engine::PokerEngine;
//!
//! let mut a = create_bot("smart").unwrap();
//! let mut b = create_bot("random").unwrap();
//! let mut engine = PokerEngine::new(Some(42));
//! let outcome = engine.play_hand(&mut a, &mut b, 1000, 1000).unwrap();
//! // An odd split pot leaves at most one chip with the house.
//! let total = outcome.small_blind_stack + outcome.big_blind_stack;
//! assert!(total <= 2000 && 2000 - total <= 1);
//! ```

use pokerduel_engine::bot::PokerBot;
use pokerduel_engine::errors::BotError;
use pokerduel_engine::protocol::{GameState, PokerAction};

pub mod allin;
pub mod calling;
pub mod random;
pub mod scripted;
pub mod smart;

/// A decision policy. Strategies never fail; anything they return is subject to
/// the engine's legality rules like any other bot reply.
pub trait Strategy: Send {
    fn get_action(&mut self, state: &GameState) -> PokerAction;

    fn name(&self) -> &str;

    /// Sees the settled hand. Most strategies don't care.
    fn observe(&mut self, _state: &GameState) {}
}

type Factory = Box<dyn Fn() -> Box<dyn Strategy> + Send>;

/// A strategy running inside the tournament process.
///
/// `reset` throws the current instance away and builds a fresh one, so nothing
/// a strategy remembers survives into the next match.
pub struct InProcessBot {
    factory: Factory,
    instance: Box<dyn Strategy>,
    name: String,
}

impl InProcessBot {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Box<dyn Strategy> + Send + 'static,
    {
        let instance = factory();
        let name = instance.name().to_string();
        Self {
            factory: Box::new(factory),
            instance,
            name,
        }
    }
}

impl std::fmt::Debug for InProcessBot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InProcessBot").field("name", &self.name).finish()
    }
}

impl PokerBot for InProcessBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_action(&mut self, state: &GameState) -> Result<PokerAction, BotError> {
        Ok(self.instance.get_action(state))
    }

    fn reset(&mut self) -> Result<(), BotError> {
        self.instance = (self.factory)();
        Ok(())
    }

    fn observe_result(&mut self, state: &GameState) -> Result<(), BotError> {
        self.instance.observe(state);
        Ok(())
    }
}

/// Names accepted by [`create_bot`], in registration order.
pub const REGISTERED: &[&str] = &["random", "allin", "smart", "calling"];

/// Builds a registered bot by (case-insensitive) name.
///
/// ```rust
/// use pokerduel_ai::create_bot;
/// use pokerduel_engine::bot::PokerBot;
///
/// assert_eq!(create_bot("AllIn").unwrap().name(), "All In Bot");
/// assert!(create_bot("telepath").is_none());
/// ```
pub fn create_bot(name: &str) -> Option<InProcessBot> {
    let bot = match name.to_ascii_lowercase().as_str() {
        "random" => InProcessBot::new(|| Box::new(random::RandomBot::new())),
        "allin" | "all-in" => InProcessBot::new(|| Box::new(allin::AllInBot)),
        "smart" => InProcessBot::new(|| Box::new(smart::SmartBot)),
        "calling" => InProcessBot::new(|| Box::new(calling::CallingBot)),
        _ => return None,
    };
    Some(bot)
}
