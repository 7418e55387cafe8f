use crate::state::Position;

/// One of the four move directions a command may contain.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed iteration order used by blast walks and candidate listing.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset with `y` growing downward.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Cell reached by one step from `origin`.
    pub const fn step_from(self, origin: Position) -> Position {
        let (dx, dy) = self.delta();
        origin.offset(dx, dy)
    }

    /// Cell `distance` steps away from `origin`.
    pub const fn walk_from(self, origin: Position, distance: i32) -> Position {
        let (dx, dy) = self.delta();
        origin.offset(dx * distance, dy * distance)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_lowercase_names_only() {
        assert_eq!(Direction::from_str("up"), Ok(Direction::Up));
        assert_eq!(Direction::from_str("right"), Ok(Direction::Right));
        assert!(Direction::from_str("north").is_err());
        assert!(Direction::from_str("").is_err());
    }

    #[test]
    fn up_decreases_y() {
        let origin = Position::new(3, 3);
        assert_eq!(Direction::Up.step_from(origin), Position::new(3, 2));
        assert_eq!(Direction::Left.walk_from(origin, 2), Position::new(1, 3));
    }
}
