use crate::state::Position;

/// Game configuration constants and tunable parameters.
///
/// Only the match setup is tunable. The turn rules (action economy, fuse,
/// drop table, shrink schedule) are fixed so that every match resolves the
/// same way from the same seed and command history.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Side length of the square board. Must be odd and at least 5.
    pub board_size: u32,
    /// Chance that a free floor cell is filled with a soft wall at setup.
    pub soft_wall_ratio: f64,
    /// Seed of the single PRNG stream used for the whole match.
    pub seed: u32,
    /// Spawn of player one. Defaults to `(1, 1)`.
    pub p1_spawn: Option<Position>,
    /// Spawn of player two. Defaults to `(N-2, N-2)`.
    pub p2_spawn: Option<Position>,
}

impl GameConfig {
    // ===== action economy =====
    /// AP granted every turn before carry-over.
    pub const AP_BASE: u32 = 3;
    /// Maximum leftover AP carried into the next turn.
    pub const AP_CARRY_MAX: u32 = 2;
    pub const AP_MAX: u32 = 5;
    /// Floor applied after the self-hit penalty.
    pub const AP_MIN: u32 = 1;
    pub const SELF_HIT_PENALTY: u32 = 1;
    pub const PLACE_COST: u32 = 1;
    pub const MOVE_COST: u32 = 1;

    // ===== bombs and items =====
    /// Timer given to a freshly placed bomb.
    pub const BOMB_FUSE: i32 = 2;
    pub const INITIAL_FIRE_POWER: u32 = 1;
    /// Turns of bonus-move entitlement granted by one pair of boots.
    pub const BOOTS_TURNS: u32 = 2;
    pub const ITEM_DROP_RATE: f64 = 0.3;
    pub const ITEM_MAX_ON_BOARD: usize = 3;

    // ===== endgame =====
    pub const SHRINK_START_TURN: u32 = 15;
    pub const SHRINK_INTERVAL: u32 = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BOARD_SIZE: u32 = 7;
    pub const DEFAULT_SOFT_WALL_RATIO: f64 = 0.45;
    pub const DEFAULT_SEED: u32 = 0x1f2e_3d4c;

    pub fn new() -> Self {
        Self {
            board_size: Self::DEFAULT_BOARD_SIZE,
            soft_wall_ratio: Self::DEFAULT_SOFT_WALL_RATIO,
            seed: Self::DEFAULT_SEED,
            p1_spawn: None,
            p2_spawn: None,
        }
    }

    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::new()
        }
    }

    /// Resolved spawn of player one.
    pub fn p1_spawn(&self) -> Position {
        self.p1_spawn.unwrap_or(Position::new(1, 1))
    }

    /// Resolved spawn of player two.
    pub fn p2_spawn(&self) -> Position {
        let far = self.board_size as i32 - 2;
        self.p2_spawn.unwrap_or(Position::new(far, far))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
