use std::io;
use std::path::PathBuf;

use pokerduel_engine::errors::GameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("invalid tournament config: {0}")]
    InvalidConfig(String),
    #[error("need at least two bots, got {0}")]
    NotEnoughBots(usize),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Results(#[from] ResultError),
}

#[derive(Debug, Error)]
pub enum ResultError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode results: {0}")]
    Encode(#[from] serde_json::Error),
}
