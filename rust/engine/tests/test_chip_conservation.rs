use pokerduel_engine::bot::PokerBot;
use pokerduel_engine::engine::PokerEngine;
use pokerduel_engine::errors::BotError;
use pokerduel_engine::protocol::{ActionType, GameState, PokerAction};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Picks any action at all, including nonsense raise sizes and unknown kinds.
struct Chaos {
    rng: ChaCha20Rng,
}

impl PokerBot for Chaos {
    fn name(&self) -> &str {
        "chaos"
    }

    fn get_action(&mut self, state: &GameState) -> Result<PokerAction, BotError> {
        let action = match self.rng.random_range(0..10) {
            0 => PokerAction::fold(),
            1..=4 => PokerAction::call(),
            5 => PokerAction {
                action_type: ActionType::Invalid,
                amount: None,
            },
            6 => PokerAction::raise(i64::from(state.my_stack) * 2),
            _ => PokerAction::raise(self.rng.random_range(-100..300)),
        };
        Ok(action)
    }

    fn reset(&mut self) -> Result<(), BotError> {
        Ok(())
    }
}

#[test]
fn chips_are_conserved_except_odd_split_remainders() {
    let mut engine = PokerEngine::new(Some(2024));
    let mut a = Chaos { rng: ChaCha20Rng::seed_from_u64(1) };
    let mut b = Chaos { rng: ChaCha20Rng::seed_from_u64(2) };

    for start in [(1000, 1000), (15, 1000), (1000, 20), (37, 455), (10, 20)] {
        for _ in 0..200 {
            let out = engine.play_hand(&mut a, &mut b, start.0, start.1).unwrap();
            let dropped = u32::from(out.result.is_tie && out.result.pot % 2 == 1);
            assert_eq!(
                out.small_blind_stack + out.big_blind_stack + dropped,
                start.0 + start.1,
                "start {start:?}, result {:?}",
                out.result
            );
        }
    }
}
