//! Coin-flip strategy used as a sparring partner.

use pokerduel_engine::protocol::{GameState, PokerAction};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Strategy;

/// When checking is free: 70% check, 30% min-raise.
/// Facing a bet: 10% fold, 70% call, 20% min-raise.
#[derive(Debug, Clone)]
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomBot {
    fn get_action(&mut self, state: &GameState) -> PokerAction {
        let x: f64 = self.rng.random();
        let min_raise = PokerAction::raise(i64::from(state.min_raise));
        if state.to_call == 0 {
            if x < 0.7 { PokerAction::call() } else { min_raise }
        } else if x < 0.1 {
            PokerAction::fold()
        } else if x < 0.8 {
            PokerAction::call()
        } else {
            min_raise
        }
    }

    fn name(&self) -> &str {
        "RandomBot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::state;
    use pokerduel_engine::cards::{Card, Rank, Suit};
    use pokerduel_engine::protocol::ActionType;

    #[test]
    fn never_folds_when_checking_is_free() {
        let mut bot = RandomBot::with_seed(9);
        let s = state(Card::new(Rank::Four, Suit::Hearts), None, 0);
        for _ in 0..500 {
            assert_ne!(bot.get_action(&s).action_type, ActionType::Fold);
        }
    }

    #[test]
    fn raises_are_always_the_minimum() {
        let mut bot = RandomBot::with_seed(3);
        let s = state(Card::new(Rank::Four, Suit::Hearts), None, 40);
        let mut kinds = std::collections::HashSet::new();
        for _ in 0..500 {
            let action = bot.get_action(&s);
            if action.action_type == ActionType::Raise {
                assert_eq!(action.amount, Some(20));
            }
            kinds.insert(action.action_type);
        }
        assert_eq!(kinds.len(), 3, "fold, call and raise all show up");
    }

    #[test]
    fn same_seed_same_choices() {
        let s = state(Card::new(Rank::Four, Suit::Hearts), None, 10);
        let mut a = RandomBot::with_seed(11);
        let mut b = RandomBot::with_seed(11);
        for _ in 0..50 {
            assert_eq!(a.get_action(&s), b.get_action(&s));
        }
    }
}
