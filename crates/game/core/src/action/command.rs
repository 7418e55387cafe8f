//! Player commands: the raw form produced by input layers, its canonical
//! normalized form, and the action sequence the resolver walks.

use std::str::FromStr;

use super::Direction;

/// Command as submitted by an input layer, possibly malformed.
///
/// Unknown move names are dropped, an out-of-range `place_bomb_step` is
/// clamped, and the legacy `place_bomb` flag means "place after all moves"
/// when no explicit step is given.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawCommand {
    pub moves: Vec<String>,
    pub place_bomb_step: Option<i64>,
    pub place_bomb: bool,
}

impl RawCommand {
    /// The empty command: no moves, no placement.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn from_moves(moves: &[Direction]) -> Self {
        Self {
            moves: moves.iter().map(|dir| dir.as_ref().to_owned()).collect(),
            ..Self::default()
        }
    }

    /// Places a bomb before the move at index `step` (or after all moves
    /// when `step` equals the move count).
    pub fn with_bomb_at(mut self, step: i64) -> Self {
        self.place_bomb_step = Some(step);
        self
    }

    /// Legacy form: place after every move.
    pub fn with_bomb_last(mut self) -> Self {
        self.place_bomb = true;
        self
    }

    pub fn normalize(&self) -> Command {
        Command::normalize(self)
    }
}

impl From<Command> for RawCommand {
    fn from(command: Command) -> Self {
        Self {
            moves: command
                .moves
                .iter()
                .map(|dir| dir.as_ref().to_owned())
                .collect(),
            place_bomb_step: command.place_bomb_step.map(|step| step as i64),
            place_bomb: false,
        }
    }
}

/// Canonical command: only known directions, placement step within
/// `0..=moves.len()`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    pub moves: Vec<Direction>,
    pub place_bomb_step: Option<usize>,
}

impl Command {
    pub fn new(moves: Vec<Direction>, place_bomb_step: Option<usize>) -> Self {
        let place_bomb_step = place_bomb_step.map(|step| step.min(moves.len()));
        Self {
            moves,
            place_bomb_step,
        }
    }

    pub fn normalize(raw: &RawCommand) -> Self {
        let moves: Vec<Direction> = raw
            .moves
            .iter()
            .filter_map(|name| Direction::from_str(name).ok())
            .collect();

        let requested = match raw.place_bomb_step {
            Some(step) => Some(step),
            None if raw.place_bomb => Some(moves.len() as i64),
            None => None,
        };
        let place_bomb_step = requested.map(|step| step.clamp(0, moves.len() as i64) as usize);

        Self {
            moves,
            place_bomb_step,
        }
    }

    /// Expands the command into its ordered action sequence.
    ///
    /// The placement, if any, is emitted right before the move at
    /// `place_bomb_step` (or last, when the step equals the move count).
    pub fn actions(&self) -> Vec<TurnAction> {
        let mut actions = Vec::with_capacity(self.moves.len() + 1);
        for index in 0..=self.moves.len() {
            if self.place_bomb_step == Some(index) {
                actions.push(TurnAction::PlaceBomb);
            }
            if let Some(direction) = self.moves.get(index) {
                actions.push(TurnAction::Move(*direction));
            }
        }
        actions
    }
}

/// Single slot of an action sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnAction {
    Move(Direction),
    PlaceBomb,
}
