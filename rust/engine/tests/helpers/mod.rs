#![allow(dead_code)]

use std::collections::VecDeque;

use pokerduel_engine::bot::PokerBot;
use pokerduel_engine::cards::{Card, Rank, Suit};
use pokerduel_engine::deck::Deck;
use pokerduel_engine::engine::PokerEngine;
use pokerduel_engine::errors::{BotError, BotFault};
use pokerduel_engine::protocol::{GameState, PokerAction};

/// Replays a fixed list of actions, then calls. Records every state it is shown.
pub struct Scripted {
    pub name: String,
    pub script: VecDeque<PokerAction>,
    pub seen: Vec<GameState>,
    pub results_seen: Vec<GameState>,
    pub fail_after: Option<usize>,
}

impl Scripted {
    pub fn new(name: &str, script: Vec<PokerAction>) -> Self {
        Self {
            name: name.to_string(),
            script: script.into(),
            seen: Vec::new(),
            results_seen: Vec::new(),
            fail_after: None,
        }
    }

    pub fn calling(name: &str) -> Self {
        Self::new(name, Vec::new())
    }

    /// Faults (as a timeout) on the query after `n` successful replies.
    pub fn failing_after(name: &str, n: usize) -> Self {
        let mut bot = Self::calling(name);
        bot.fail_after = Some(n);
        bot
    }
}

impl PokerBot for Scripted {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_action(&mut self, state: &GameState) -> Result<PokerAction, BotError> {
        if self.fail_after == Some(self.seen.len()) {
            return Err(BotError::new(
                self.name.clone(),
                BotFault::Timeout {
                    after: std::time::Duration::from_millis(1000),
                },
            ));
        }
        self.seen.push(state.clone());
        Ok(self.script.pop_front().unwrap_or_else(PokerAction::call))
    }

    fn reset(&mut self) -> Result<(), BotError> {
        Ok(())
    }

    fn observe_result(&mut self, state: &GameState) -> Result<(), BotError> {
        self.results_seen.push(state.clone());
        Ok(())
    }
}

pub fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Engine dealing SB hole, BB hole, then the community card.
pub fn rigged(sb: Card, bb: Card, community: Card) -> PokerEngine {
    PokerEngine::with_deck(Deck::stacked(vec![sb, bb, community]))
}

/// SB wins any showdown: ace vs deuce, community five of another suit.
pub fn sb_wins() -> PokerEngine {
    rigged(
        card(Rank::Ace, Suit::Spades),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Seven, Suit::Hearts),
    )
}

/// BB wins any showdown.
pub fn bb_wins() -> PokerEngine {
    rigged(
        card(Rank::Two, Suit::Clubs),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Seven, Suit::Hearts),
    )
}

/// Identical ranks for both seats: kings of different suits, community nine.
pub fn tie() -> PokerEngine {
    rigged(
        card(Rank::King, Suit::Spades),
        card(Rank::King, Suit::Clubs),
        card(Rank::Nine, Suit::Hearts),
    )
}
