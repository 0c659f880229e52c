use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Two-card hand categories, weakest first so the derived `Ord` ranks them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    Flush = 3,
    Straight = 4,
    StraightFlush = 5,
}

/// Strength of a hole card plus the community card.
///
/// Field order matters: the derived ordering compares category, then the
/// higher card's value, then the lower card's value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    pub high: u8,
    pub low: u8,
}

impl HandRank {
    /// Single number view of the rank for bot heuristics; preserves the ordering.
    pub fn absolute_value(&self) -> u32 {
        (self.category as u32) * 1000 + u32::from(self.high) * 10 + u32::from(self.low)
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} high card value: {} (absolute: {})",
            self.category,
            self.high,
            self.absolute_value()
        )
    }
}

/// Ranks exactly two cards. Pure; the same pair in either order yields the same rank.
pub fn evaluate(a: Card, b: Card) -> HandRank {
    let (v1, v2) = (a.value(), b.value());
    let high = v1.max(v2);
    let low = v1.min(v2);

    // Ace plays high only: A-2 is not a straight.
    let straight = high - low == 1 && !(high == Rank::Ace.value() && low == Rank::Two.value());
    let flush = a.suit == b.suit;

    let category = if straight && flush {
        Category::StraightFlush
    } else if straight {
        Category::Straight
    } else if flush {
        Category::Flush
    } else if v1 == v2 {
        Category::Pair
    } else {
        Category::HighCard
    };

    HandRank {
        category,
        high,
        low,
    }
}

pub fn compare_hands(a: &HandRank, b: &HandRank) -> Ordering {
    a.cmp(b)
}
