//! # pokerduel-runner: tournaments between external bots
//!
//! - [`channel`] - [`ProcessBot`](channel::ProcessBot): one bot process behind a
//!   line-based stdin/stdout channel, with per-request timeouts
//! - [`tournament`] - round-robin scheduling, match bookkeeping and disqualification
//! - [`results`] - match records, result sinks and standings
//! - [`logging`] - tracing setup and a capturing subscriber for tests
//! - [`errors`] - runner error types
//!
//! ```rust
//! use pokerduel_engine::bot::PokerBot;
//! use pokerduel_runner::results::MemorySink;
//! use pokerduel_runner::tournament::{TournamentConfig, TournamentScheduler};
//! # use pokerduel_engine::errors::BotError;
//! # use pokerduel_engine::protocol::{GameState, PokerAction};
//! # struct Caller(&'static str);
//! # impl PokerBot for Caller {
//! #     fn name(&self) -> &str { self.0 }
//! #     fn get_action(&mut self, _: &GameState) -> Result<PokerAction, BotError> { Ok(PokerAction::call()) }
//! #     fn reset(&mut self) -> Result<(), BotError> { Ok(()) }
//! # }
//!
//! let config = TournamentConfig { matches_per_pair: 2, hands_per_match: 5, seed: Some(1), ..Default::default() };
//! let bots: Vec<Box<dyn PokerBot>> = vec![Box::new(Caller("a")), Box::new(Caller("b"))];
//! let mut sink = MemorySink::default();
//! let report = TournamentScheduler::new(config)?.run(bots, &mut sink)?;
//! assert_eq!(report.records.len(), 2);
//! # Ok::<(), pokerduel_runner::errors::TournamentError>(())
//! ```

pub mod channel;
pub mod errors;
pub mod logging;
pub mod results;
pub mod tournament;
