//! Unified error types surfaced by the runtime API.
use duel_core::{MatchStatus, PlayerId, SetupError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("match is already over ({status})")]
    MatchFinished { status: MatchStatus },

    #[error("no snapshot recorded for turn {0}")]
    UnknownTurn(u32),

    #[error("{player} command provider not set")]
    ProviderNotSet { player: PlayerId },

    #[error("replay diverged at turn {turn}")]
    ReplayDiverged { turn: u32 },

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("failed to load match content")]
    Content(#[source] anyhow::Error),
}
