//! Initial board generation.

use crate::config::GameConfig;
use crate::error::SetupError;
use crate::state::{Board, Cell, Position};

use super::LcgRng;

/// Output of [`BoardGenerator::generate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedBoard {
    pub board: Board,
    /// PRNG cursor after the soft-wall fill; the match continues from here.
    pub seed: u32,
}

/// Builds the starting grid: border and even-coordinate pillars, cleared
/// spawn corridors, and a seeded soft-wall fill.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardGenerator {
    size: u32,
    soft_wall_ratio: f64,
    spawns: [Position; 2],
}

impl BoardGenerator {
    pub const MIN_SIZE: u32 = 5;

    pub fn new(size: u32, soft_wall_ratio: f64, p1_spawn: Position, p2_spawn: Position) -> Self {
        Self {
            size,
            soft_wall_ratio,
            spawns: [p1_spawn, p2_spawn],
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.board_size,
            config.soft_wall_ratio,
            config.p1_spawn(),
            config.p2_spawn(),
        )
    }

    pub fn spawns(&self) -> [Position; 2] {
        self.spawns
    }

    fn validate(&self) -> Result<(), SetupError> {
        if self.size < Self::MIN_SIZE || self.size % 2 == 0 {
            return Err(SetupError::InvalidBoardSize {
                size: self.size,
                min: Self::MIN_SIZE,
            });
        }
        if !(0.0..=1.0).contains(&self.soft_wall_ratio) {
            return Err(SetupError::InvalidSoftWallRatio {
                ratio: self.soft_wall_ratio,
            });
        }
        let bounds = Board::new(self.size);
        for position in self.spawns {
            if !bounds.contains(position) || bounds.ring_index(position) == 0 {
                return Err(SetupError::SpawnOutOfBounds {
                    position,
                    size: self.size,
                });
            }
        }
        if self.spawns[0] == self.spawns[1] {
            return Err(SetupError::SharedSpawn {
                position: self.spawns[0],
            });
        }
        Ok(())
    }

    /// Generates the board, drawing one PRNG value per free floor cell.
    pub fn generate(&self, seed: u32) -> Result<GeneratedBoard, SetupError> {
        self.validate()?;

        let mut board = Board::with_solid_grid(self.size);
        self.clear_corridors(&mut board);

        let mut rng = LcgRng::new(seed);
        let free: Vec<Position> = board
            .positions()
            .filter(|position| board.get(*position) == Some(Cell::Floor))
            .collect();
        for position in free {
            if rng.next_value() < self.soft_wall_ratio {
                board.set(position, Cell::SoftWall);
            }
        }

        // The fill must never re-block a spawn.
        self.clear_corridors(&mut board);
        for spawn in self.spawns {
            board.set(spawn, Cell::Floor);
        }

        Ok(GeneratedBoard {
            board,
            seed: rng.seed(),
        })
    }

    /// Forces the "+" shaped corridor around every spawn to floor.
    fn clear_corridors(&self, board: &mut Board) {
        for spawn in self.spawns {
            for (dx, dy) in [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)] {
                board.set(spawn.offset(dx, dy), Cell::Floor);
            }
        }
    }
}
