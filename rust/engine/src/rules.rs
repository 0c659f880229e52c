use crate::protocol::{ActionType, PokerAction};

pub const SMALL_BLIND: u32 = 10;
pub const BIG_BLIND: u32 = 20;
/// Minimum raise at the start of every betting round.
pub const MIN_RAISE: u32 = BIG_BLIND;

/// What the engine will actually do with a bot's declared action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    /// Pays the given number of chips (possibly less than owed).
    Call(u32),
    Raise(RaiseCommitment),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaiseCommitment {
    /// Raise size after bumping to the minimum.
    pub raise: u32,
    /// Chips moved into the pot this turn, call part included.
    pub commit: u32,
    /// The commitment hit a cap: the actor's stack or what the opponent can match.
    pub all_in: bool,
}

/// Amount a call actually pays: whatever is owed, or the whole stack if that is less.
pub fn call_amount(owed: u32, stack: u32) -> u32 {
    owed.min(stack)
}

/// Raise size the table will accept. Missing, zero and negative sizes mean the
/// minimum raise; anything smaller is bumped up to it.
pub fn effective_raise(declared: Option<i64>, min_raise: u32) -> u32 {
    match declared {
        Some(amount) if amount > 0 => u32::try_from(amount).unwrap_or(u32::MAX).max(min_raise),
        _ => min_raise,
    }
}

/// Sizes a raise against both caps: the actor's stack, and the opponent's stack
/// plus what the actor still owes (nobody can be forced into a bet they cannot call).
pub fn raise_commitment(
    declared: Option<i64>,
    min_raise: u32,
    owed: u32,
    stack: u32,
    opponent_stack: u32,
) -> RaiseCommitment {
    let raise = effective_raise(declared, min_raise);
    let desired = owed.saturating_add(raise);
    // Cap (b) is what the actor owes plus the opponent's remaining stack, so the
    // opponent owes exactly `commit - owed` and can always cover it.
    let cap = stack.min(owed.saturating_add(opponent_stack));
    RaiseCommitment {
        raise,
        commit: desired.min(cap),
        all_in: desired >= cap,
    }
}

/// Maps a declared action onto a legal one. Unknown action kinds fold.
///
/// ```
/// use pokerduel_engine::protocol::PokerAction;
/// use pokerduel_engine::rules::{validate_action, ValidatedAction};
///
/// // Calling 10 with only 5 behind pays 5.
/// assert_eq!(validate_action(5, 10, 20, 1000, &PokerAction::call()), ValidatedAction::Call(5));
/// ```
pub fn validate_action(
    stack: u32,
    to_call: u32,
    min_raise: u32,
    opponent_stack: u32,
    action: &PokerAction,
) -> ValidatedAction {
    match action.action_type {
        ActionType::Fold | ActionType::Invalid => ValidatedAction::Fold,
        ActionType::Call => ValidatedAction::Call(call_amount(to_call, stack)),
        ActionType::Raise => ValidatedAction::Raise(raise_commitment(
            action.amount,
            min_raise,
            to_call,
            stack,
            opponent_stack,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_raise_means_min_raise() {
        assert_eq!(effective_raise(Some(0), 20), 20);
        assert_eq!(effective_raise(Some(-50), 20), 20);
        assert_eq!(effective_raise(None, 40), 40);
        assert_eq!(effective_raise(Some(5), 20), 20);
        assert_eq!(effective_raise(Some(75), 20), 75);
    }

    #[test]
    fn raise_capped_by_own_stack() {
        let r = raise_commitment(Some(5000), 20, 10, 990, 980);
        assert_eq!(r.commit, 990);
        assert!(r.all_in);
    }

    #[test]
    fn raise_capped_by_what_opponent_can_match() {
        let r = raise_commitment(Some(500), 20, 10, 990, 100);
        assert_eq!(r.commit, 110);
        assert!(r.all_in);
    }

    #[test]
    fn short_big_blind_caps_a_shove() {
        // 1000 vs 100 after blinds: SB has 990 behind and owes 10, BB has 80 behind.
        let r = raise_commitment(Some(5000), 20, 10, 990, 80);
        assert_eq!(r.commit, 90);
        assert!(r.all_in);
        assert_eq!(990 - r.commit, 900);
    }

    #[test]
    fn ordinary_raise_is_not_all_in() {
        let r = raise_commitment(Some(40), 20, 10, 990, 980);
        assert_eq!(r, RaiseCommitment { raise: 40, commit: 50, all_in: false });
    }

    #[test]
    fn invalid_kind_folds() {
        let action = PokerAction {
            action_type: ActionType::Invalid,
            amount: Some(100),
        };
        assert_eq!(validate_action(100, 0, 20, 100, &action), ValidatedAction::Fold);
    }
}
