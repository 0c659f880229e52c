//! # pokerduel-engine: heads-up one-card poker
//!
//! Each player gets one hole card, one community card is shared, and a hand is
//! ranked from exactly those two cards. This crate holds the rules and the hand
//! state machine; bots are reached only through the [`bot::PokerBot`] trait.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card)
//! - [`deck`] - Seeded sampling without replacement (ChaCha20)
//! - [`hand`] - Two-card hand ranking
//! - [`protocol`] - GameState / PokerAction / HandResult wire messages
//! - [`bot`] - The bot capability trait
//! - [`player`] - Seats and per-seat betting state
//! - [`rules`] - Blinds, call and raise sizing
//! - [`game`] - The per-hand state machine
//! - [`engine`] - Plays complete hands between two bots
//! - [`errors`] - Bot faults and game errors
//!
//! ## Quick Start
//!
//! ```rust
//! use pokerduel_engine::cards::{Card, Rank, Suit};
//! use pokerduel_engine::hand::{evaluate, Category};
//!
//! let rank = evaluate(
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Hearts),
//! );
//! assert_eq!(rank.category, Category::StraightFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use pokerduel_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! assert_eq!(a.deal_card(), b.deal_card());
//! ```

pub mod bot;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod player;
pub mod protocol;
pub mod rules;
