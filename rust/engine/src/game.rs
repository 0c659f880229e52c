use std::cmp::Ordering;

use tracing::trace;

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{compare_hands, evaluate};
use crate::player::{Seat, SeatState};
use crate::protocol::{ActionType, GameState, HandEvent, HandResult, PokerAction, Winner};
use crate::rules::{validate_action, ValidatedAction, BIG_BLIND, MIN_RAISE, SMALL_BLIND};

/// Phases of one hand, in order. Fold resolution and showdown both lead to settlement.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    PostingBlinds,
    Preflop,
    DealCommunity,
    Postflop,
    Showdown,
    FoldResolution,
    Settlement,
}

/// Mutable state of a single hand, driven phase by phase.
///
/// Seats live in a two-element array indexed by [`Seat::index`]; `active` is the
/// index of the seat to act and flips on every turn change.
#[derive(Debug, Clone)]
pub struct HandContext {
    phase: Phase,
    seats: [SeatState; 2],
    holes: [Card; 2],
    community: Option<Card>,
    pot: u32,
    min_raise: u32,
    active: usize,
    consecutive_calls: u8,
    // Set after an all-in raise: the opponent gets exactly one Fold/Call.
    awaiting_response: bool,
    // An all-in sequence closed the action; no more betting this hand.
    all_in_locked: bool,
    folded: Option<Seat>,
    history: Vec<HandEvent>,
    result: Option<HandResult>,
}

impl HandContext {
    /// Seats both players. Fails if a stack cannot cover its blind.
    pub fn new(small_blind_stack: u32, big_blind_stack: u32, holes: [Card; 2]) -> Result<Self, GameError> {
        for (seat, stack, blind) in [
            (Seat::SmallBlind, small_blind_stack, SMALL_BLIND),
            (Seat::BigBlind, big_blind_stack, BIG_BLIND),
        ] {
            if stack < blind {
                return Err(GameError::StackBelowBlind { seat, stack, blind });
            }
        }
        Ok(Self {
            phase: Phase::PostingBlinds,
            seats: [SeatState::new(small_blind_stack), SeatState::new(big_blind_stack)],
            holes,
            community: None,
            pot: 0,
            min_raise: MIN_RAISE,
            active: Seat::SmallBlind.index(),
            consecutive_calls: 0,
            awaiting_response: false,
            all_in_locked: false,
            folded: None,
            history: Vec::new(),
            result: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }

    pub fn seat(&self, seat: Seat) -> &SeatState {
        &self.seats[seat.index()]
    }

    pub fn stacks(&self) -> (u32, u32) {
        (self.seats[0].stack, self.seats[1].stack)
    }

    pub fn active_seat(&self) -> Seat {
        Seat::from_index(self.active)
    }

    pub fn community(&self) -> Option<Card> {
        self.community
    }

    pub fn history(&self) -> &[HandEvent] {
        &self.history
    }

    pub fn result(&self) -> Option<&HandResult> {
        self.result.as_ref()
    }

    /// PostingBlinds -> Preflop.
    pub fn post_blinds(&mut self) {
        if self.phase != Phase::PostingBlinds {
            return;
        }
        let sb = self.seats[0].pay(SMALL_BLIND);
        let bb = self.seats[1].pay(BIG_BLIND);
        self.pot = sb + bb;
        self.seats[0].owed = BIG_BLIND - SMALL_BLIND;
        self.seats[1].owed = 0;
        self.min_raise = MIN_RAISE;
        self.active = Seat::SmallBlind.index();
        self.phase = Phase::Preflop;
        trace!(pot = self.pot, "blinds posted");
    }

    /// Snapshot of the table for `seat`.
    pub fn state_for(&self, seat: Seat) -> GameState {
        let me = &self.seats[seat.index()];
        let opponent = &self.seats[seat.other().index()];
        GameState {
            my_stack: me.stack,
            opponent_stack: opponent.stack,
            pot: self.pot,
            my_card: self.holes[seat.index()],
            community_card: self.community,
            to_call: me.owed,
            min_raise: self.min_raise,
            action_history: self.history.clone(),
            hand_result: self.result.clone(),
        }
    }

    /// Applies the active seat's declared action during a betting phase.
    /// Outside Preflop/Postflop the action is dropped.
    pub fn apply(&mut self, action: PokerAction) {
        if !matches!(self.phase, Phase::Preflop | Phase::Postflop) {
            return;
        }
        let seat = self.active_seat();

        if self.awaiting_response {
            self.apply_response(seat, action);
            return;
        }

        let actor = self.seats[self.active];
        let opponent = self.seats[1 - self.active];
        let validated = validate_action(actor.stack, actor.owed, self.min_raise, opponent.stack, &action);
        // History goes to both bots, so it records the fold that was applied.
        let recorded = if action.action_type == ActionType::Invalid {
            trace!(%seat, "unrecognised action treated as fold");
            PokerAction::fold()
        } else {
            action
        };
        self.history.push(HandEvent::Action(recorded));

        match validated {
            ValidatedAction::Fold => self.fold(seat),
            ValidatedAction::Call(_) => {
                self.call(seat);
                self.consecutive_calls += 1;
                if self.consecutive_calls >= 2 {
                    self.end_round();
                } else {
                    self.pass_turn();
                }
            }
            ValidatedAction::Raise(raise) => {
                let paid = self.seats[self.active].pay(raise.commit);
                self.pot += paid;
                let owed = self.seats[self.active].owed;
                self.seats[self.active].owed = 0;
                self.seats[1 - self.active].owed = paid.saturating_sub(owed);
                self.min_raise = self.min_raise.max(raise.raise);
                self.consecutive_calls = 0;
                trace!(%seat, raise = raise.raise, commit = paid, all_in = raise.all_in, pot = self.pot, "raise");
                if raise.all_in {
                    self.seats[self.active].all_in = true;
                    self.awaiting_response = true;
                }
                self.pass_turn();
            }
        }
    }

    // The single reply owed after an all-in. Anything but Fold or Call is ignored.
    fn apply_response(&mut self, seat: Seat, action: PokerAction) {
        match action.action_type {
            ActionType::Fold => {
                self.history.push(HandEvent::Action(action));
                self.fold(seat);
            }
            ActionType::Call => {
                self.history.push(HandEvent::Action(action));
                self.call(seat);
            }
            ActionType::Raise | ActionType::Invalid => {
                trace!(%seat, "action after all-in ignored");
            }
        }
        self.awaiting_response = false;
        self.all_in_locked = true;
        if self.folded.is_none() {
            self.end_round();
        }
    }

    fn fold(&mut self, seat: Seat) {
        trace!(%seat, pot = self.pot, "fold");
        self.folded = Some(seat);
        self.phase = Phase::FoldResolution;
    }

    fn call(&mut self, seat: Seat) {
        let idx = seat.index();
        let owed = self.seats[idx].owed;
        let paid = self.seats[idx].pay(owed);
        if self.seats[idx].stack == 0 && paid > 0 {
            self.seats[idx].all_in = true;
        }
        self.pot += paid;
        self.seats[0].owed = 0;
        self.seats[1].owed = 0;
        trace!(%seat, paid, pot = self.pot, "call");
    }

    fn pass_turn(&mut self) {
        self.active = 1 - self.active;
    }

    fn end_round(&mut self) {
        self.phase = match self.phase {
            Phase::Preflop => Phase::DealCommunity,
            _ => Phase::Showdown,
        };
    }

    /// DealCommunity -> Postflop, or straight to Showdown when nobody can bet.
    pub fn deal_community(&mut self, card: Card) {
        if self.phase != Phase::DealCommunity {
            return;
        }
        self.community = Some(card);
        let skip = self.all_in_locked || self.seats.iter().any(SeatState::is_busted);
        if skip {
            trace!(community = %card, "postflop skipped, already all-in");
            self.phase = Phase::Showdown;
            return;
        }
        self.seats[0].owed = 0;
        self.seats[1].owed = 0;
        self.min_raise = MIN_RAISE;
        self.active = Seat::SmallBlind.index();
        self.consecutive_calls = 0;
        self.phase = Phase::Postflop;
        trace!(community = %card, "postflop");
    }

    /// Pays out the pot and records the result. Showdown/FoldResolution -> Settlement.
    ///
    /// A tied showdown splits the pot by integer division; an odd chip stays unpaid.
    pub fn settle(&mut self) -> Result<&HandResult, GameError> {
        let winner = match self.phase {
            Phase::FoldResolution => match self.folded {
                Some(seat) => Winner::from(seat.other()),
                None => return Err(GameError::NotSettleable { phase: self.phase }),
            },
            Phase::Showdown => {
                let community = self.community.ok_or(GameError::MissingCommunityCard)?;
                let sb = evaluate(self.holes[0], community);
                let bb = evaluate(self.holes[1], community);
                trace!(small_blind = %sb, big_blind = %bb, "showdown");
                match compare_hands(&sb, &bb) {
                    Ordering::Greater => Winner::SmallBlind,
                    Ordering::Less => Winner::BigBlind,
                    Ordering::Equal => Winner::Tie,
                }
            }
            phase => return Err(GameError::NotSettleable { phase }),
        };

        match winner {
            Winner::SmallBlind => self.seats[0].stack += self.pot,
            Winner::BigBlind => self.seats[1].stack += self.pot,
            Winner::Tie => {
                let half = self.pot / 2;
                self.seats[0].stack += half;
                self.seats[1].stack += half;
            }
        }

        let result = HandResult {
            small_blind_bot_card: self.holes[0],
            big_blind_bot_card: self.holes[1],
            community_card: self.community,
            pot: self.pot,
            winner,
            is_tie: winner == Winner::Tie,
        };
        self.history.push(HandEvent::Result(result.clone()));
        self.phase = Phase::Settlement;
        Ok(self.result.insert(result))
    }
}
