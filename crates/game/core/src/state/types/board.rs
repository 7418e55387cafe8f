use super::Position;

/// Terrain of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Floor,
    SolidWall,
    SoftWall,
    /// Left behind by the shrinking board. Impassable and lethal.
    Void,
}

impl Cell {
    /// Whether a player (or a kicked bomb) may enter this cell.
    pub const fn is_walkable(self) -> bool {
        matches!(self, Cell::Floor)
    }

    /// Whether a blast stops *before* this cell without touching it.
    pub const fn absorbs_blast(self) -> bool {
        matches!(self, Cell::SolidWall | Cell::Void)
    }
}

/// Fixed-size square grid stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: u32,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an all-floor board.
    pub fn new(size: u32) -> Self {
        Self::filled(size, Cell::Floor)
    }

    pub fn filled(size: u32, cell: Cell) -> Self {
        Self {
            size,
            cells: vec![cell; (size as usize) * (size as usize)],
        }
    }

    /// Solid border plus a solid pillar on every even `(x, y)`, floor elsewhere.
    pub fn with_solid_grid(size: u32) -> Self {
        let mut board = Self::new(size);
        let far = size as i32 - 1;
        for position in Self::new(size).positions() {
            let border = position.x == 0 || position.y == 0 || position.x == far || position.y == far;
            let pillar = position.x % 2 == 0 && position.y % 2 == 0;
            if border || pillar {
                board.set(position, Cell::SolidWall);
            }
        }
        board
    }

    /// Builds a board from row-major cells. Returns `None` when the cell count
    /// does not match `size * size`.
    pub fn from_cells(size: u32, cells: Vec<Cell>) -> Option<Self> {
        ((size as usize) * (size as usize) == cells.len()).then_some(Self { size, cells })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.size as i32
            && position.y < self.size as i32
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.size as usize + position.x as usize)
    }

    /// Cell at `position`, or `None` when out of bounds.
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.index(position).map(|idx| self.cells[idx])
    }

    /// Overwrites the cell at `position`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, position: Position, cell: Cell) {
        if let Some(idx) = self.index(position) {
            self.cells[idx] = cell;
        }
    }

    /// Whether `position` is on the board and enterable.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.get(position).is_some_and(Cell::is_walkable)
    }

    /// Distance from `position` to the nearest board edge.
    pub fn ring_index(&self, position: Position) -> u32 {
        let far = self.size as i32 - 1;
        position
            .x
            .min(position.y)
            .min(far - position.x)
            .min(far - position.y)
            .max(0) as u32
    }

    /// Iterates all positions in raster order (row by row, left to right).
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size as i32;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_are_none() {
        let board = Board::new(5);
        assert_eq!(board.get(Position::new(-1, 0)), None);
        assert_eq!(board.get(Position::new(0, 5)), None);
        assert_eq!(board.get(Position::new(4, 4)), Some(Cell::Floor));
    }

    #[test]
    fn ring_index_measures_distance_to_nearest_edge() {
        let board = Board::new(7);
        assert_eq!(board.ring_index(Position::new(0, 3)), 0);
        assert_eq!(board.ring_index(Position::new(1, 5)), 1);
        assert_eq!(board.ring_index(Position::new(3, 3)), 3);
        assert_eq!(board.ring_index(Position::new(6, 6)), 0);
    }

    #[test]
    fn positions_iterate_in_raster_order() {
        let board = Board::new(3);
        let first: Vec<_> = board.positions().take(4).collect();
        assert_eq!(
            first,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(0, 1)
            ]
        );
    }

    #[test]
    fn solid_grid_has_border_and_even_pillars() {
        let board = Board::with_solid_grid(7);
        assert_eq!(board.get(Position::new(0, 3)), Some(Cell::SolidWall));
        assert_eq!(board.get(Position::new(6, 1)), Some(Cell::SolidWall));
        assert_eq!(board.get(Position::new(2, 4)), Some(Cell::SolidWall));
        assert_eq!(board.get(Position::new(1, 1)), Some(Cell::Floor));
        assert_eq!(board.get(Position::new(3, 2)), Some(Cell::Floor));
        let solid = board.cells().iter().filter(|cell| **cell == Cell::SolidWall).count();
        assert_eq!(solid, 24 + 4);
    }

    #[test]
    fn from_cells_rejects_wrong_length() {
        assert!(Board::from_cells(3, vec![Cell::Floor; 8]).is_none());
        assert!(Board::from_cells(3, vec![Cell::Floor; 9]).is_some());
    }
}
