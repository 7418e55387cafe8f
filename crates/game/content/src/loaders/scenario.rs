//! Scenario loader.
//!
//! A scenario is a hand-authored match position: terrain (an optional full
//! grid, then per-cell overrides) plus both players, live bombs, and items. Scenarios are used to
//! stage specific situations (a chain about to go off, a kick duel) without
//! playing up to them from a generated board.
//!
//! ```ron
//! ScenarioSpec(
//!     size: 7,
//!     seed: 42,
//!     solid_grid: true,
//!     tiles: [(3, 1, SoftWall)],
//!     p1: (position: (1, 1), kick: true),
//!     p2: (position: (5, 5)),
//!     bombs: [(owner: P2, position: (3, 3), timer: 1)],
//!     items: [(kind: Boots, position: (1, 3))],
//! )
//! ```

use std::path::Path;

use duel_core::{
    Board, Bomb, Cell, GameConfig, GameState, Item, ItemKind, MatchStatus, Player, PlayerId,
    Position, SetupError, SpawnCounts,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Player entry of a scenario. Unset fields take the fresh-match values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub position: (i32, i32),
    #[serde(default = "default_true")]
    pub alive: bool,
    #[serde(default = "default_fire_power")]
    pub fire_power: u32,
    #[serde(default)]
    pub kick: bool,
    #[serde(default)]
    pub boots_turns: u32,
    /// Leftover AP feeding the next grant's carry-over.
    #[serde(default)]
    pub ap_end: u32,
    #[serde(default)]
    pub ap_penalty_next: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BombSpec {
    pub owner: PlayerId,
    pub position: (i32, i32),
    #[serde(default = "default_fuse")]
    pub timer: i32,
    #[serde(default = "default_fire_power")]
    pub range: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSpec {
    pub kind: ItemKind,
    pub position: (i32, i32),
}

/// Scenario file contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub size: u32,
    #[serde(default)]
    pub seed: u32,
    #[serde(default = "default_turn")]
    pub turn: u32,
    /// Full row-major terrain, `size * size` cells. Replaces the open board.
    #[serde(default)]
    pub grid: Option<Vec<Cell>>,
    /// Adds the border and even-coordinate pillars of a generated board.
    #[serde(default)]
    pub solid_grid: bool,
    /// `(x, y, cell)` overrides applied after the grid.
    #[serde(default)]
    pub tiles: Vec<(i32, i32, Cell)>,
    pub p1: PlayerSpec,
    pub p2: PlayerSpec,
    #[serde(default)]
    pub bombs: Vec<BombSpec>,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
    /// Drops already made, for the guaranteed-minimum rule.
    #[serde(default)]
    pub spawned: SpawnCounts,
}

fn default_true() -> bool {
    true
}

fn default_fire_power() -> u32 {
    GameConfig::INITIAL_FIRE_POWER
}

fn default_fuse() -> i32 {
    GameConfig::BOMB_FUSE
}

fn default_turn() -> u32 {
    1
}

fn at((x, y): (i32, i32)) -> Position {
    Position::new(x, y)
}

impl ScenarioSpec {
    /// Builds the match state this scenario describes.
    ///
    /// Pieces must sit on floor cells inside the board, and the two players
    /// must not share a cell. Bomb and item ids are assigned in file order.
    pub fn into_state(self) -> Result<GameState, SetupError> {
        if self.size < duel_core::BoardGenerator::MIN_SIZE || self.size % 2 == 0 {
            return Err(SetupError::InvalidBoardSize {
                size: self.size,
                min: duel_core::BoardGenerator::MIN_SIZE,
            });
        }

        let mut board = match self.grid {
            Some(cells) => {
                let actual = cells.len();
                Board::from_cells(self.size, cells).ok_or(SetupError::TileCountMismatch {
                    expected: (self.size as usize) * (self.size as usize),
                    actual,
                })?
            }
            None => Board::new(self.size),
        };
        if self.solid_grid {
            let grid = Board::with_solid_grid(self.size);
            for position in grid.positions() {
                if grid.get(position) == Some(Cell::SolidWall) {
                    board.set(position, Cell::SolidWall);
                }
            }
        }
        for &(x, y, cell) in &self.tiles {
            let position = Position::new(x, y);
            place_check(&board, "tile", position, false)?;
            board.set(position, cell);
        }

        let p1 = at(self.p1.position);
        let p2 = at(self.p2.position);
        place_check(&board, "player", p1, true)?;
        place_check(&board, "player", p2, true)?;
        if p1 == p2 {
            return Err(SetupError::SharedSpawn { position: p1 });
        }

        let mut state = GameState::new(board, p1, p2, self.seed);
        state.turn = self.turn;
        state.spawned = self.spawned;
        for (id, spec) in [(PlayerId::P1, &self.p1), (PlayerId::P2, &self.p2)] {
            *state.player_mut(id) = player_from(id, spec);
        }

        for spec in &self.bombs {
            let position = at(spec.position);
            place_check(&state.board, "bomb", position, true)?;
            let id = state.allocate_bomb_id();
            state
                .bombs
                .push(Bomb::new(id, spec.owner, position, spec.timer, spec.range));
        }
        for spec in &self.items {
            let position = at(spec.position);
            place_check(&state.board, "item", position, true)?;
            let id = state.allocate_item_id();
            state.items.push(Item::new(id, spec.kind, position));
        }

        state.status = MatchStatus::from_survivors(self.p1.alive, self.p2.alive);
        Ok(state)
    }
}

fn player_from(id: PlayerId, spec: &PlayerSpec) -> Player {
    let mut player = Player::new(id, at(spec.position))
        .with_fire_power(spec.fire_power)
        .with_boots_turns(spec.boots_turns);
    player.alive = spec.alive;
    player.kick = spec.kick;
    player.ap_end = spec.ap_end;
    player.ap_penalty_next = spec.ap_penalty_next;
    player
}

fn place_check(
    board: &Board,
    piece: &'static str,
    position: Position,
    needs_floor: bool,
) -> Result<(), SetupError> {
    if !board.contains(position) {
        return Err(SetupError::PieceOutOfBounds { piece, position });
    }
    if needs_floor && !board.is_walkable(position) {
        return Err(SetupError::PieceOnBlockedCell { piece, position });
    }
    Ok(())
}

/// Loader for scenario files in RON.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load the raw scenario description.
    pub fn load_spec(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        Self::parse_spec(&content)
    }

    pub fn parse_spec(content: &str) -> LoadResult<ScenarioSpec> {
        let spec: ScenarioSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        Ok(spec)
    }

    /// Load a scenario file and build its match state.
    pub fn load(path: &Path) -> LoadResult<GameState> {
        let spec = Self::load_spec(path)?;
        let state = spec
            .into_state()
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use duel_core::{BombId, RawCommand, resolve};

    use super::*;

    const CHAIN: &str = r#"
        ScenarioSpec(
            size: 7,
            seed: 42,
            tiles: [(5, 3, SoftWall)],
            p1: (position: (1, 1)),
            p2: (position: (5, 5), kick: true, fire_power: 2),
            bombs: [
                (owner: P1, position: (3, 3), timer: 1),
                (owner: P2, position: (4, 3), timer: 2),
            ],
            items: [(kind: Boots, position: (1, 3))],
        )
    "#;

    #[test]
    fn builds_state_from_ron() {
        let state = ScenarioLoader::parse_spec(CHAIN)
            .unwrap()
            .into_state()
            .unwrap();

        assert_eq!(state.turn, 1);
        assert_eq!(state.rng.seed(), 42);
        assert_eq!(state.board.get(Position::new(5, 3)), Some(Cell::SoftWall));
        assert_eq!(state.board.get(Position::new(0, 0)), Some(Cell::Floor));
        let p2 = state.player(PlayerId::P2);
        assert!(p2.kick);
        assert_eq!(p2.fire_power, 2);
        assert_eq!(state.bombs[1].id, BombId(2));
        assert_eq!(state.bombs[1].range, 1);
        assert_eq!(state.next_bomb_id, 3);
        assert_eq!(state.items[0].kind, ItemKind::Boots);
    }

    #[test]
    fn scenario_resolves_like_any_state() {
        let state = ScenarioLoader::parse_spec(CHAIN)
            .unwrap()
            .into_state()
            .unwrap();
        let next = resolve(&state, &RawCommand::idle(), &RawCommand::idle());
        assert!(next.bombs.is_empty());
        assert_eq!(next.board.get(Position::new(5, 3)), Some(Cell::Floor));
        assert_eq!(next.items.len(), 2);
    }

    #[test]
    fn solid_grid_blocks_piece_placement() {
        let spec = ScenarioLoader::parse_spec(
            r#"ScenarioSpec(size: 7, solid_grid: true, p1: (position: (2, 2)), p2: (position: (5, 5)))"#,
        )
        .unwrap();
        assert_eq!(
            spec.into_state().unwrap_err().error_code(),
            "piece_on_blocked_cell"
        );
    }

    #[test]
    fn full_grid_replaces_open_board() {
        let spec = ScenarioLoader::parse_spec(
            r#"ScenarioSpec(
                size: 5,
                grid: Some([
                    Floor, Floor, Floor, Floor, Floor,
                    Floor, Floor, SoftWall, Floor, Floor,
                    Floor, Floor, Void, Floor, Floor,
                    Floor, Floor, Floor, Floor, Floor,
                    Floor, Floor, Floor, Floor, Floor,
                ]),
                p1: (position: (1, 1)),
                p2: (position: (3, 3)),
            )"#,
        )
        .unwrap();
        let state = spec.into_state().unwrap();
        assert_eq!(state.board.get(Position::new(2, 1)), Some(Cell::SoftWall));
        assert_eq!(state.board.get(Position::new(2, 2)), Some(Cell::Void));
        assert_eq!(state.board.get(Position::new(0, 0)), Some(Cell::Floor));
    }

    #[test]
    fn short_grid_is_rejected() {
        let spec = ScenarioLoader::parse_spec(
            r#"ScenarioSpec(
                size: 5,
                grid: Some([Floor, Floor, Floor]),
                p1: (position: (1, 1)),
                p2: (position: (3, 3)),
            )"#,
        )
        .unwrap();
        assert_eq!(
            spec.into_state().unwrap_err(),
            SetupError::TileCountMismatch {
                expected: 25,
                actual: 3,
            }
        );
    }

    #[test]
    fn rejects_off_board_bomb() {
        let spec = ScenarioLoader::parse_spec(
            r#"ScenarioSpec(
                size: 7,
                p1: (position: (1, 1)),
                p2: (position: (5, 5)),
                bombs: [(owner: P1, position: (9, 1))],
            )"#,
        )
        .unwrap();
        assert_eq!(
            spec.into_state().unwrap_err(),
            SetupError::PieceOutOfBounds {
                piece: "bomb",
                position: Position::new(9, 1),
            }
        );
    }

    #[test]
    fn rejects_even_board() {
        let spec = ScenarioLoader::parse_spec(
            r#"ScenarioSpec(size: 8, p1: (position: (1, 1)), p2: (position: (5, 5)))"#,
        )
        .unwrap();
        assert!(matches!(
            spec.into_state(),
            Err(SetupError::InvalidBoardSize { size: 8, .. })
        ));
    }

    #[test]
    fn dead_player_scenario_is_already_decided() {
        let spec = ScenarioLoader::parse_spec(
            r#"ScenarioSpec(size: 5, p1: (position: (1, 1), alive: false), p2: (position: (3, 3)))"#,
        )
        .unwrap();
        assert_eq!(spec.into_state().unwrap().status, MatchStatus::P2Win);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CHAIN.as_bytes()).unwrap();
        let state = ScenarioLoader::load(file.path()).unwrap();
        assert_eq!(state.bombs.len(), 2);
    }

    #[test]
    fn invalid_scenario_error_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"ScenarioSpec(size: 7, p1: (position: (1, 1)), p2: (position: (1, 1)))"#,
        )
        .unwrap();
        let err = ScenarioLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("both players spawn"));
    }
}
