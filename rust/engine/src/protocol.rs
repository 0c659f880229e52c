//! Messages exchanged with bots.
//!
//! Every message is one line of JSON. Field names are PascalCase and cards use
//! their printed symbols, so a bot written against the line protocol never needs
//! to know anything about this crate.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::Seat;

/// Request line that asks a bot for its display name.
pub const NAME_REQUEST: &str = "__name__";
/// Request line that tells a bot a new match is starting.
pub const RESET_REQUEST: &str = "__reset__";

/// Kind of action a bot declares. Unknown kinds deserialize to `Invalid`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    #[serde(alias = "fold", alias = "FOLD")]
    Fold,
    #[serde(alias = "call", alias = "CALL")]
    Call,
    #[serde(alias = "raise", alias = "RAISE")]
    Raise,
    #[serde(other)]
    Invalid,
}

/// A bot's reply. Advisory only: the engine decides what it actually does.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PokerAction {
    pub action_type: ActionType,
    /// Raise size on top of the amount owed; ignored for Fold and Call.
    #[serde(default)]
    pub amount: Option<i64>,
}

impl PokerAction {
    pub fn fold() -> Self {
        Self {
            action_type: ActionType::Fold,
            amount: None,
        }
    }

    pub fn call() -> Self {
        Self {
            action_type: ActionType::Call,
            amount: None,
        }
    }

    pub fn raise(amount: i64) -> Self {
        Self {
            action_type: ActionType::Raise,
            amount: Some(amount),
        }
    }

    pub fn from_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line.trim())
    }
}

/// Who took the pot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Winner {
    SmallBlind,
    BigBlind,
    Tie,
}

impl From<Seat> for Winner {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::SmallBlind => Winner::SmallBlind,
            Seat::BigBlind => Winner::BigBlind,
        }
    }
}

/// Final record of one hand, sent to both bots once the hand is settled.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HandResult {
    pub small_blind_bot_card: Card,
    pub big_blind_bot_card: Card,
    /// Absent when the hand ended by a fold before the community card.
    pub community_card: Option<Card>,
    pub pot: u32,
    pub winner: Winner,
    pub is_tie: bool,
}

/// One entry of the per-hand history: an action, or the trailing result marker.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HandEvent {
    Action(PokerAction),
    Result(HandResult),
}

/// Snapshot of the table from one bot's point of view.
///
/// The first history entry belongs to the small blind, so an empty history means
/// the receiver is the small blind.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameState {
    pub my_stack: u32,
    pub opponent_stack: u32,
    pub pot: u32,
    pub my_card: Card,
    pub community_card: Option<Card>,
    pub to_call: u32,
    pub min_raise: u32,
    pub action_history: Vec<HandEvent>,
    pub hand_result: Option<HandResult>,
}

impl GameState {
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
