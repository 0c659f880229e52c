use tracing::trace;

use crate::bot::PokerBot;
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{HandContext, Phase};
use crate::player::Seat;
use crate::protocol::HandResult;

/// Stacks after a hand plus the result both bots were shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandOutcome {
    pub small_blind_stack: u32,
    pub big_blind_stack: u32,
    pub result: HandResult,
}

/// Drives complete hands between two bots.
///
/// # Examples
///
/// ```
/// use pokerduel_engine::engine::PokerEngine;
/// use pokerduel_engine::bot::PokerBot;
/// use pokerduel_engine::errors::BotError;
/// use pokerduel_engine::protocol::{GameState, PokerAction};
///
/// struct Folder;
/// impl PokerBot for Folder {
///     fn name(&self) -> &str { "Folder" }
///     fn get_action(&mut self, _: &GameState) -> Result<PokerAction, BotError> {
///         Ok(PokerAction::fold())
///     }
///     fn reset(&mut self) -> Result<(), BotError> { Ok(()) }
/// }
///
/// let mut engine = PokerEngine::new(Some(7));
/// let outcome = engine.play_hand(&mut Folder, &mut Folder, 1000, 1000).unwrap();
/// assert_eq!((outcome.small_blind_stack, outcome.big_blind_stack), (990, 1010));
/// ```
#[derive(Debug)]
pub struct PokerEngine {
    deck: Deck,
}

impl PokerEngine {
    /// Seeded engines deal the same cards for the same sequence of hands.
    pub fn new(seed: Option<u64>) -> Self {
        let deck = match seed {
            Some(seed) => Deck::new_with_seed(seed),
            None => Deck::new_random(),
        };
        Self { deck }
    }

    pub fn with_deck(deck: Deck) -> Self {
        Self { deck }
    }

    /// Plays one hand. `small_blind` acts first and posts 10; `big_blind` posts 20.
    ///
    /// A bot fault aborts the hand and is reported with the seat that caused it.
    pub fn play_hand(
        &mut self,
        small_blind: &mut dyn PokerBot,
        big_blind: &mut dyn PokerBot,
        small_blind_stack: u32,
        big_blind_stack: u32,
    ) -> Result<HandOutcome, GameError> {
        self.deck.reset();
        let holes = [self.draw()?, self.draw()?];
        let mut ctx = HandContext::new(small_blind_stack, big_blind_stack, holes)?;
        trace!(
            small_blind = small_blind.name(),
            big_blind = big_blind.name(),
            sb_card = %holes[0],
            bb_card = %holes[1],
            "hand start"
        );

        loop {
            match ctx.phase() {
                Phase::PostingBlinds => ctx.post_blinds(),
                Phase::Preflop | Phase::Postflop => {
                    let seat = ctx.active_seat();
                    let state = ctx.state_for(seat);
                    let action = match seat {
                        Seat::SmallBlind => small_blind.get_action(&state),
                        Seat::BigBlind => big_blind.get_action(&state),
                    }
                    .map_err(|error| GameError::Bot { seat, error })?;
                    trace!(%seat, ?action, "declared");
                    ctx.apply(action);
                }
                Phase::DealCommunity => {
                    let card = self.draw()?;
                    ctx.deal_community(card);
                }
                Phase::Showdown | Phase::FoldResolution => {
                    ctx.settle()?;
                }
                Phase::Settlement => break,
            }
        }

        for seat in Seat::ALL {
            let state = ctx.state_for(seat);
            match seat {
                Seat::SmallBlind => small_blind.observe_result(&state),
                Seat::BigBlind => big_blind.observe_result(&state),
            }
            .map_err(|error| GameError::Bot { seat, error })?;
        }

        let (small_blind_stack, big_blind_stack) = ctx.stacks();
        let result = ctx
            .result()
            .cloned()
            .ok_or(GameError::NotSettleable { phase: ctx.phase() })?;
        trace!(small_blind_stack, big_blind_stack, winner = ?result.winner, pot = result.pot, "hand end");
        Ok(HandOutcome {
            small_blind_stack,
            big_blind_stack,
            result,
        })
    }

    fn draw(&mut self) -> Result<Card, GameError> {
        self.deck.deal_card().ok_or(GameError::DeckExhausted)
    }
}
