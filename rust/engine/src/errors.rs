use std::io;
use std::time::Duration;

use thiserror::Error;

use crate::game::Phase;
use crate::player::Seat;

/// What went wrong while talking to a bot.
#[derive(Debug, Error)]
pub enum BotFault {
    #[error("failed to start: {0}")]
    Spawn(#[source] io::Error),
    #[error("handshake failed: {0}")]
    Handshake(#[source] Box<BotFault>),
    #[error("no reply within {after:?}")]
    Timeout { after: Duration },
    #[error("channel closed (process exited)")]
    Closed,
    #[error("unparseable reply {line:?}: {source}")]
    Malformed {
        line: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Other(String),
}

/// A protocol fault attributed to one bot.
#[derive(Debug, Error)]
#[error("bot '{bot}': {fault}")]
pub struct BotError {
    pub bot: String,
    #[source]
    pub fault: BotFault,
}

impl BotError {
    pub fn new(bot: impl Into<String>, fault: BotFault) -> Self {
        Self {
            bot: bot.into(),
            fault,
        }
    }
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("{seat} cannot cover the blind: stack {stack}, blind {blind}")]
    StackBelowBlind { seat: Seat, stack: u32, blind: u32 },
    #[error("deck exhausted")]
    DeckExhausted,
    #[error("showdown reached without a community card")]
    MissingCommunityCard,
    #[error("hand cannot be settled during {phase:?}")]
    NotSettleable { phase: Phase },
    #[error("{seat} faulted: {error}")]
    Bot {
        seat: Seat,
        #[source]
        error: BotError,
    },
}

impl GameError {
    /// The seat whose bot caused this error, if a bot did.
    pub fn faulted_seat(&self) -> Option<Seat> {
        match self {
            GameError::Bot { seat, .. } => Some(*seat),
            _ => None,
        }
    }
}
