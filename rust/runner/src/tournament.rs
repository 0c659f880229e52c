//! Round-robin scheduling over ordered bot pairs.

use pokerduel_engine::bot::PokerBot;
use pokerduel_engine::engine::PokerEngine;
use pokerduel_engine::errors::{BotError, GameError};
use pokerduel_engine::player::Seat;
use pokerduel_engine::rules::{BIG_BLIND, SMALL_BLIND};
use tracing::{debug, info, warn};

use crate::errors::TournamentError;
use crate::results::{MatchRecord, ResultSink};

/// Knobs for one tournament run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentConfig {
    pub matches_per_pair: u32,
    pub hands_per_match: u32,
    pub starting_stack: u32,
    /// Seeds the deck; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            matches_per_pair: 100,
            hands_per_match: 100,
            starting_stack: 1000,
            seed: None,
        }
    }
}

impl TournamentConfig {
    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.matches_per_pair == 0 {
            return Err(TournamentError::InvalidConfig(
                "matches_per_pair must be at least 1".to_string(),
            ));
        }
        if self.hands_per_match == 0 {
            return Err(TournamentError::InvalidConfig(
                "hands_per_match must be at least 1".to_string(),
            ));
        }
        if self.starting_stack < BIG_BLIND {
            return Err(TournamentError::InvalidConfig(format!(
                "starting_stack must be at least the big blind ({BIG_BLIND})"
            )));
        }
        Ok(())
    }
}

/// What a run produced besides the records handed to the sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TournamentReport {
    pub records: Vec<MatchRecord>,
    /// Names of bots disqualified during the run, in order.
    pub disqualified: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    A,
    B,
}

#[derive(Debug)]
struct MatchOutcome {
    winner: Option<Side>,
    hands: u32,
}

#[derive(Debug)]
enum MatchError {
    Fault { side: Side, error: BotError },
    Game(GameError),
}

/// Runs every ordered pair of distinct bots through the configured matches.
#[derive(Debug)]
pub struct TournamentScheduler {
    config: TournamentConfig,
    engine: PokerEngine,
}

impl TournamentScheduler {
    pub fn new(config: TournamentConfig) -> Result<Self, TournamentError> {
        config.validate()?;
        let engine = PokerEngine::new(config.seed);
        Ok(Self { config, engine })
    }

    /// Plays the whole round robin.
    ///
    /// Takes ownership of the bots so every one of them is dropped (and its
    /// process killed) when the run ends, on every path. A disqualified bot is
    /// dropped on the spot.
    pub fn run(
        &mut self,
        bots: Vec<Box<dyn PokerBot>>,
        sink: &mut dyn ResultSink,
    ) -> Result<TournamentReport, TournamentError> {
        if bots.len() < 2 {
            return Err(TournamentError::NotEnoughBots(bots.len()));
        }
        info!(
            matches = self.config.matches_per_pair,
            hands = self.config.hands_per_match,
            bots = bots.len(),
            "starting tournament"
        );

        let mut seats: Vec<Option<Box<dyn PokerBot>>> = bots.into_iter().map(Some).collect();
        let mut report = TournamentReport::default();

        for i in 0..seats.len() {
            for j in 0..seats.len() {
                if i == j {
                    continue;
                }
                let (slot_a, slot_b) = pair_mut(&mut seats, i, j);
                let (Some(a), Some(b)) = (slot_a.as_mut(), slot_b.as_mut()) else {
                    debug!(i, j, "skipping pairing with a disqualified bot");
                    continue;
                };
                debug!(bot_a = a.name(), bot_b = b.name(), "pairing start");

                match self.play_pair(a.as_mut(), b.as_mut()) {
                    Ok(record) => {
                        info!(
                            "=== {} {} - {} {} ===",
                            record.bot_a_wins, record.bot_a, record.bot_b, record.bot_b_wins
                        );
                        sink.record(&record)?;
                        report.records.push(record);
                    }
                    Err(MatchError::Fault { side, error }) => {
                        let slot = match side {
                            Side::A => slot_a,
                            Side::B => slot_b,
                        };
                        warn!(bot = %error.bot, cause = %error.fault, "bot disqualified, pairing abandoned");
                        report.disqualified.push(error.bot);
                        // Dropping the handle kills the process.
                        *slot = None;
                    }
                    Err(MatchError::Game(e)) => return Err(e.into()),
                }
            }
        }

        sink.finish()?;
        Ok(report)
    }

    fn play_pair(&mut self, a: &mut dyn PokerBot, b: &mut dyn PokerBot) -> Result<MatchRecord, MatchError> {
        let mut record = MatchRecord::new(a.name(), b.name());
        for m in 0..self.config.matches_per_pair {
            a.reset()
                .map_err(|error| MatchError::Fault { side: Side::A, error })?;
            b.reset()
                .map_err(|error| MatchError::Fault { side: Side::B, error })?;

            let outcome = self.play_match(a, b)?;
            record.matches_played += 1;
            record.hands_played += outcome.hands;
            match outcome.winner {
                Some(Side::A) => record.bot_a_wins += 1,
                Some(Side::B) => record.bot_b_wins += 1,
                None => debug!(match_no = m + 1, bot_a = %record.bot_a, bot_b = %record.bot_b, "match tied"),
            }
        }
        Ok(record)
    }

    /// One match: stacks start even, then the bots swap blinds every hand with
    /// their stacks following them.
    fn play_match(&mut self, a: &mut dyn PokerBot, b: &mut dyn PokerBot) -> Result<MatchOutcome, MatchError> {
        let start = self.config.starting_stack;
        let mut stack_a = start;
        let mut stack_b = start;
        let mut a_is_small_blind = true;
        let mut hands = 0;

        for _ in 0..self.config.hands_per_match {
            let (sb_stack, bb_stack) = if a_is_small_blind {
                (stack_a, stack_b)
            } else {
                (stack_b, stack_a)
            };
            if sb_stack < SMALL_BLIND || bb_stack < BIG_BLIND {
                break;
            }

            let played = if a_is_small_blind {
                self.engine.play_hand(a, b, sb_stack, bb_stack)
            } else {
                self.engine.play_hand(b, a, sb_stack, bb_stack)
            };
            let outcome = played.map_err(|e| match e {
                GameError::Bot { seat, error } => {
                    let side = match (seat, a_is_small_blind) {
                        (Seat::SmallBlind, true) | (Seat::BigBlind, false) => Side::A,
                        _ => Side::B,
                    };
                    MatchError::Fault { side, error }
                }
                other => MatchError::Game(other),
            })?;

            if a_is_small_blind {
                stack_a = outcome.small_blind_stack;
                stack_b = outcome.big_blind_stack;
            } else {
                stack_b = outcome.small_blind_stack;
                stack_a = outcome.big_blind_stack;
            }
            hands += 1;
            a_is_small_blind = !a_is_small_blind;
            if stack_a == 0 || stack_b == 0 {
                break;
            }
        }

        let winner = match stack_a.cmp(&stack_b) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        };
        Ok(MatchOutcome { winner, hands })
    }
}

/// Two distinct mutable elements of one slice.
fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    assert_ne!(i, j);
    if i < j {
        let (left, right) = items.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
