use std::fmt;

use serde::{Deserialize, Serialize};

/// The two seating roles of a heads-up hand. The small blind acts first in
/// every betting round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Seat {
    SmallBlind,
    BigBlind,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Seat::SmallBlind, Seat::BigBlind];

    pub fn index(self) -> usize {
        match self {
            Seat::SmallBlind => 0,
            Seat::BigBlind => 1,
        }
    }

    pub fn from_index(index: usize) -> Seat {
        if index == 0 {
            Seat::SmallBlind
        } else {
            Seat::BigBlind
        }
    }

    pub fn other(self) -> Seat {
        match self {
            Seat::SmallBlind => Seat::BigBlind,
            Seat::BigBlind => Seat::SmallBlind,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::SmallBlind => write!(f, "small blind"),
            Seat::BigBlind => write!(f, "big blind"),
        }
    }
}

/// Per-seat betting state for one hand.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SeatState {
    /// Chips still behind, not yet in the pot.
    pub stack: u32,
    /// Chips this seat must add to match the opponent.
    pub owed: u32,
    pub all_in: bool,
}

impl SeatState {
    pub fn new(stack: u32) -> Self {
        Self {
            stack,
            owed: 0,
            all_in: false,
        }
    }

    /// Moves up to `amount` chips out of the stack and returns what was actually paid.
    pub fn pay(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        paid
    }

    pub fn is_busted(&self) -> bool {
        self.stack == 0
    }
}
