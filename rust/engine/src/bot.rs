use crate::errors::BotError;
use crate::protocol::{GameState, PokerAction};

/// Anything that can sit at the table: an external process or an in-process strategy.
///
/// The engine only ever talks to bots through this trait.
pub trait PokerBot: Send {
    /// Stable display name, fixed once the bot is registered.
    fn name(&self) -> &str;

    fn get_action(&mut self, state: &GameState) -> Result<PokerAction, BotError>;

    /// Called before every match. State carried across hands within a match is the
    /// bot's own business; nothing should survive a reset.
    fn reset(&mut self) -> Result<(), BotError>;

    /// Delivers the terminal state of a hand. The reply, if any, is discarded,
    /// but faults still count.
    fn observe_result(&mut self, state: &GameState) -> Result<(), BotError> {
        self.get_action(state).map(|_| ())
    }
}

impl<B: PokerBot + ?Sized> PokerBot for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get_action(&mut self, state: &GameState) -> Result<PokerAction, BotError> {
        (**self).get_action(state)
    }

    fn reset(&mut self) -> Result<(), BotError> {
        (**self).reset()
    }

    fn observe_result(&mut self, state: &GameState) -> Result<(), BotError> {
        (**self).observe_result(state)
    }
}
