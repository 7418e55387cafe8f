use duel_core::{MatchStatus, TurnReport};
use serde::{Deserialize, Serialize};

/// Published once per resolved turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnEvent {
    /// Turn that was resolved.
    pub turn: u32,
    pub status: MatchStatus,
    /// Root of the snapshot the turn produced.
    pub state_root: [u8; 32],
    pub report: TurnReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MatchEvent {
    /// The match reached a terminal status on `turn`.
    Ended {
        turn: u32,
        status: MatchStatus,
        state_root: [u8; 32],
    },
}
