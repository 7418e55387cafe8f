//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the board, both
//! players, bombs, items, and match bookkeeping. Callers clone or query this
//! state but a new turn is only ever produced by the engine.
pub mod types;

pub use types::{
    Board, Bomb, BombId, Cell, Item, ItemId, ItemKind, MatchStatus, Player, PlayerId, Position,
    SpawnCounts,
};

use crate::config::GameConfig;
use crate::env::{BoardGenerator, LcgRng};
use crate::error::SetupError;

/// Canonical snapshot of the deterministic game state.
///
/// A snapshot is never mutated once published: resolving a turn clones it
/// and returns the successor, so earlier snapshots stay valid for readers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Turn about to be resolved. Starts at 1.
    pub turn: u32,
    pub board: Board,
    /// Indexed by [`PlayerId::index`].
    pub players: [Player; 2],
    pub bombs: Vec<Bomb>,
    pub items: Vec<Item>,
    pub status: MatchStatus,
    /// Cursor of the match-wide PRNG stream.
    pub rng: LcgRng,
    pub next_bomb_id: u32,
    pub next_item_id: u32,
    /// Drops per item kind, for the guaranteed-minimum rule.
    pub spawned: SpawnCounts,
}

impl GameState {
    /// Creates a state around an existing board, with both players alive at
    /// the given positions and no pieces.
    pub fn new(board: Board, p1: Position, p2: Position, seed: u32) -> Self {
        Self {
            turn: 1,
            board,
            players: [Player::new(PlayerId::P1, p1), Player::new(PlayerId::P2, p2)],
            bombs: Vec::new(),
            items: Vec::new(),
            status: MatchStatus::Ongoing,
            rng: LcgRng::new(seed),
            next_bomb_id: 1,
            next_item_id: 1,
            spawned: SpawnCounts::default(),
        }
    }

    /// Generates the opening state of a match from `config`.
    pub fn new_match(config: &GameConfig) -> Result<Self, SetupError> {
        let generator = BoardGenerator::from_config(config);
        let generated = generator.generate(config.seed)?;
        let [p1, p2] = generator.spawns();
        Ok(Self::new(generated.board, p1, p2, generated.seed))
    }

    /// All-floor board with default spawns; the usual starting point for
    /// hand-built scenarios.
    pub fn open_floor(size: u32, seed: u32) -> Self {
        let far = size as i32 - 2;
        Self::new(
            Board::new(size),
            Position::new(1, 1),
            Position::new(far, far),
            seed,
        )
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    pub fn bomb_at(&self, position: Position) -> Option<&Bomb> {
        self.bombs.iter().find(|bomb| bomb.position == position)
    }

    pub fn has_bomb_at(&self, position: Position) -> bool {
        self.bomb_at(position).is_some()
    }

    pub fn item_at(&self, position: Position) -> Option<&Item> {
        self.items.iter().find(|item| item.position == position)
    }

    /// Allocates the next bomb id (never reused).
    pub fn allocate_bomb_id(&mut self) -> BombId {
        let id = BombId(self.next_bomb_id);
        self.next_bomb_id += 1;
        id
    }

    /// Allocates the next item id (never reused).
    pub fn allocate_item_id(&mut self) -> ItemId {
        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;
        id
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Deterministic fingerprint of the whole snapshot.
    ///
    /// SHA-256 over the bincode encoding. Two matches that replayed the same
    /// commands from the same seed have equal roots.
    #[cfg(feature = "serde")]
    pub fn state_root(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        if let Ok(bytes) = bincode::serialize(self) {
            hasher.update(&bytes);
        }
        hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_match_uses_config_spawns() {
        let state = GameState::new_match(&GameConfig::default()).unwrap();
        assert_eq!(state.turn, 1);
        assert_eq!(state.player(PlayerId::P1).position, Position::new(1, 1));
        assert_eq!(state.player(PlayerId::P2).position, Position::new(5, 5));
        assert_eq!(state.status, MatchStatus::Ongoing);
        assert_ne!(state.rng.seed(), GameConfig::DEFAULT_SEED);
    }

    #[test]
    fn ids_are_monotonic() {
        let mut state = GameState::open_floor(7, 1);
        assert_eq!(state.allocate_bomb_id(), BombId(1));
        assert_eq!(state.allocate_bomb_id(), BombId(2));
        assert_eq!(state.allocate_item_id(), ItemId(1));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn state_root_tracks_content() {
        let a = GameState::open_floor(7, 1);
        let mut b = a.clone();
        assert_eq!(a.state_root(), b.state_root());
        b.player_mut(PlayerId::P1).fire_power = 2;
        assert_ne!(
            hex::encode(a.state_root()),
            hex::encode(b.state_root())
        );
    }
}
