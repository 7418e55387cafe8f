//! Deterministic rules of the two-player bomb duel.
//!
//! `duel-core` owns the canonical game model (board, players, bombs, items),
//! the seeded board generator, command normalization, the simultaneous turn
//! resolver, and the single-player projection used by previews and bots.
//! Everything here is pure: no I/O, no clocks, no logging. New states are only
//! produced by [`engine::GameEngine`], and the same seed plus the same command
//! history always yields the same match.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod projection;
pub mod state;

#[cfg(feature = "serde")]
pub use action::compute_commands_root;
pub use action::{Command, Direction, RawCommand, TurnAction};
pub use config::GameConfig;
pub use engine::{
    BlastTags, DeathCause, GameEngine, MoveOutcome, MoveVeto, PlacementOutcome, StepReport,
    TurnBudget, TurnOutcome, TurnReport, blast_footprint, resolve, resolve_with_report,
    shrink_layer,
};
pub use env::{BoardGenerator, GeneratedBoard, LcgRng};
pub use error::SetupError;
pub use projection::{PlannedBomb, Projection, candidate_moves, imminent_blast_cells, project};
pub use state::{
    Board, Bomb, BombId, Cell, GameState, Item, ItemId, ItemKind, MatchStatus, Player, PlayerId,
    Position, SpawnCounts,
};
